// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTTP client for the CloudPRNT server's whitelisted methods.
//
// The flows depend on the `CloudprntRpc` trait, never on this concrete
// client, so tests can substitute a scripted stub. `HttpRpcClient` is the
// production implementation speaking Frappe's `/api/method/` convention
// with optional token authentication.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use bondruck_core::error::{BondruckError, Result};
use bondruck_core::types::{
    AdoptionRequest, DiscoveredPrinter, InvoicePrintRequest, SettingsSnapshot, TestPrintRequest,
};
use bondruck_core::AppConfig;

use crate::protocol::{endpoints, CallStatus, DiscoveryPayload, Envelope, RpcOutcome};

/// The remote operations the flows are clients of.
///
/// One method per server endpoint; every method is a single round trip with
/// two terminal outcomes and no retries at this layer.
#[async_trait]
pub trait CloudprntRpc: Send + Sync {
    /// List printers that have polled the server but are not yet registered.
    async fn list_discovered_printers(&self) -> Result<RpcOutcome<Vec<DiscoveredPrinter>>>;

    /// Register a discovered printer under an operator-supplied label.
    async fn adopt_printer(&self, request: &AdoptionRequest) -> Result<RpcOutcome<()>>;

    /// Ask the server to send a test print job.
    async fn send_test_print(&self, request: &TestPrintRequest) -> Result<RpcOutcome<()>>;

    /// Ask the server to print a receipt for a finalized invoice.
    async fn print_invoice(&self, request: &InvoicePrintRequest) -> Result<RpcOutcome<()>>;

    /// Fetch the current settings record snapshot.
    async fn fetch_settings(&self) -> Result<SettingsSnapshot>;

    /// Trigger the server-side printer-list refresh. The response is opaque
    /// and only ever logged.
    async fn refresh_printer_list(&self) -> Result<Value>;
}

/// Production client speaking HTTP to a Frappe site.
pub struct HttpRpcClient {
    base_url: String,
    auth: Option<(String, String)>,
    http: reqwest::Client,
}

impl HttpRpcClient {
    pub fn new(config: &AppConfig) -> Self {
        let auth = match (&config.api_key, &config.api_secret) {
            (Some(key), Some(secret)) => Some((key.clone(), secret.clone())),
            _ => None,
        };
        Self {
            base_url: config.server_url.trim_end_matches('/').to_owned(),
            auth,
            http: reqwest::Client::new(),
        }
    }

    /// URL of a whitelisted method.
    fn method_url(&self, endpoint: &str) -> String {
        format!("{}/api/method/{}", self.base_url, endpoint)
    }

    /// POST a method call and unwrap the Frappe `message` envelope.
    async fn call<T: DeserializeOwned>(&self, endpoint: &str, args: Option<Value>) -> Result<T> {
        debug!(endpoint, "issuing remote call");

        let mut request = self
            .http
            .post(self.method_url(endpoint))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some((key, secret)) = &self.auth {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("token {key}:{secret}"),
            );
        }
        if let Some(args) = args {
            request = request.json(&args);
        }

        let response = request.send().await.map_err(|e| BondruckError::Transport {
            endpoint: endpoint.to_owned(),
            detail: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BondruckError::Transport {
                endpoint: endpoint.to_owned(),
                detail: format!("HTTP {status}"),
            });
        }

        let envelope: Envelope<T> =
            response
                .json()
                .await
                .map_err(|e| BondruckError::MalformedResponse {
                    endpoint: endpoint.to_owned(),
                    detail: e.to_string(),
                })?;

        envelope
            .message
            .ok_or_else(|| BondruckError::MalformedResponse {
                endpoint: endpoint.to_owned(),
                detail: "missing message envelope".to_owned(),
            })
    }
}

#[async_trait]
impl CloudprntRpc for HttpRpcClient {
    async fn list_discovered_printers(&self) -> Result<RpcOutcome<Vec<DiscoveredPrinter>>> {
        let payload: DiscoveryPayload = self.call(endpoints::LIST_DISCOVERED, None).await?;
        Ok(payload.into())
    }

    async fn adopt_printer(&self, request: &AdoptionRequest) -> Result<RpcOutcome<()>> {
        let status: CallStatus = self
            .call(endpoints::ADOPT_PRINTER, Some(serde_json::to_value(request)?))
            .await?;
        Ok(status.into())
    }

    async fn send_test_print(&self, request: &TestPrintRequest) -> Result<RpcOutcome<()>> {
        let status: CallStatus = self
            .call(endpoints::TEST_PRINT, Some(serde_json::to_value(request)?))
            .await?;
        Ok(status.into())
    }

    async fn print_invoice(&self, request: &InvoicePrintRequest) -> Result<RpcOutcome<()>> {
        let status: CallStatus = self
            .call(endpoints::PRINT_INVOICE, Some(serde_json::to_value(request)?))
            .await?;
        Ok(status.into())
    }

    async fn fetch_settings(&self) -> Result<SettingsSnapshot> {
        self.call(endpoints::GET_SETTINGS, None).await
    }

    async fn refresh_printer_list(&self) -> Result<Value> {
        self.call(endpoints::UPDATE_PRINTERS, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(url: &str) -> HttpRpcClient {
        HttpRpcClient::new(&AppConfig {
            server_url: url.to_owned(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn method_url_joins_base_and_dotted_path() {
        let client = client_for("https://pos.example.fr");
        assert_eq!(
            client.method_url(endpoints::LIST_DISCOVERED),
            "https://pos.example.fr/api/method/cloudprnt.printer_discovery.get_discovered_printers"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = client_for("http://localhost:8000/");
        assert_eq!(
            client.method_url(endpoints::GET_SETTINGS),
            "http://localhost:8000/api/method/cloudprnt.cloudprnt.doctype.cloudprnt_settings.cloudprnt_settings.get_settings"
        );
    }

    #[test]
    fn adoption_args_serialize_to_expected_fields() {
        let request = AdoptionRequest {
            mac_address: "00:11:62:12:34:56".parse().unwrap(),
            label: "Caisse 1".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["mac_address"], "00:11:62:12:34:56");
        assert_eq!(value["label"], "Caisse 1");
    }

    #[test]
    fn auth_pair_requires_both_halves() {
        let config = AppConfig {
            api_key: Some("key".into()),
            api_secret: None,
            ..AppConfig::default()
        };
        assert!(HttpRpcClient::new(&config).auth.is_none());
    }
}
