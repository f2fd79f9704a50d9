// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the Frappe site hosting the CloudPRNT server.
    pub server_url: String,
    /// Frappe API key for token authentication (optional — session auth
    /// or an open dev site need none).
    pub api_key: Option<String>,
    /// Frappe API secret paired with `api_key`.
    pub api_secret: Option<String>,
    /// Language for operator-facing notices.
    pub language: Lang,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8000".to_owned(),
            api_key: None,
            api_secret: None,
            language: Lang::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig {
            server_url: "https://pos.example.fr".into(),
            api_key: Some("key".into()),
            api_secret: Some("secret".into()),
            language: Lang::En,
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.server_url, config.server_url);
        assert_eq!(back.language, Lang::En);
    }
}
