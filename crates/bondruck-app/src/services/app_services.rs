// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the RPC client and the persisted
// configuration, and provides async-friendly methods for the Dioxus UI.
//
// All fields are cheaply cloneable (Arc-wrapped) so the struct can be
// passed into closures and async blocks without lifetime issues.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::info;

use bondruck_core::error::Result;
use bondruck_core::i18n::Lang;
use bondruck_core::types::SettingsSnapshot;
use bondruck_core::AppConfig;
use bondruck_rpc::{CloudprntRpc, HttpRpcClient};

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    rpc: Arc<dyn CloudprntRpc>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise the services. Call once at app startup.
    pub fn init() -> Self {
        let dir = config_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();
        let rpc = Arc::new(HttpRpcClient::new(&config));

        Self {
            rpc,
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        }
    }

    /// The remote-call client the flows run against.
    pub fn rpc(&self) -> Arc<dyn CloudprntRpc> {
        Arc::clone(&self.rpc)
    }

    /// Fetch the current settings record snapshot from the server.
    pub async fn load_settings(&self) -> Result<SettingsSnapshot> {
        self.rpc.fetch_settings().await
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Language for operator-facing notices.
    pub fn lang(&self) -> Lang {
        self.config.lock().expect("config lock poisoned").language
    }

    /// Update and persist the config. A changed server URL takes effect on
    /// the next launch; the running client keeps its connection settings.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

/// Directory holding the single config file. The only state this client
/// persists, so a plain `$XDG_DATA_HOME/bondruck` (or the home-relative
/// equivalent) is all it needs; env lookups may fail in stripped-down
/// service environments, in which case the config simply does not persist
/// across launches.
fn config_dir() -> PathBuf {
    let base = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share"))
        })
        .unwrap_or_else(std::env::temp_dir);
    let dir = base.join("bondruck");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "could not create data dir");
    }
    dir
}

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            server_url: "https://pos.example.fr".into(),
            language: Lang::En,
            ..AppConfig::default()
        };
        persist_config(dir.path(), &config).unwrap();

        let back = load_config(dir.path()).unwrap();
        assert_eq!(back.server_url, "https://pos.example.fr");
        assert_eq!(back.language, Lang::En);
    }

    #[test]
    fn missing_config_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path()).is_none());
    }
}
