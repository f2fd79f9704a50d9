// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Wire shapes of the CloudPRNT server endpoints.
//
// Frappe wraps every whitelisted return value in an `{"message": ...}`
// envelope, and the CloudPRNT endpoints signal their own outcome with a
// `success` flag plus an optional human-readable `message` inside it.
// Both layers are decoded here, once, at the boundary; nothing downstream
// touches loose JSON.

use serde::Deserialize;

use bondruck_core::types::DiscoveredPrinter;

/// Dotted Frappe method paths, POSTed as `{base}/api/method/{path}`.
pub mod endpoints {
    pub const LIST_DISCOVERED: &str = "cloudprnt.printer_discovery.get_discovered_printers";
    pub const ADOPT_PRINTER: &str = "cloudprnt.printer_discovery.add_discovered_printer";
    pub const TEST_PRINT: &str =
        "cloudprnt.cloudprnt.doctype.cloudprnt_settings.cloudprnt_settings.test_print";
    pub const PRINT_INVOICE: &str = "cloudprnt.api.print_pos_invoice";
    pub const GET_SETTINGS: &str =
        "cloudprnt.cloudprnt.doctype.cloudprnt_settings.cloudprnt_settings.get_settings";
    pub const UPDATE_PRINTERS: &str =
        "cloudprnt.cloudprnt.doctype.cloudprnt_printers.cloudprnt_printers.update_printers";
}

/// Outcome of one remote call, decoded from the `success`/`message` pair.
///
/// Exactly two terminal states per call — there is no retry or partial
/// success anywhere in this protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcOutcome<T> {
    Ok(T),
    Err { message: Option<String> },
}

impl<T> RpcOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Server message of a failed call, falling back to `fallback` when the
    /// server supplied none.
    pub fn err_message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Ok(_) => fallback,
            Self::Err { message } => message.as_deref().unwrap_or(fallback),
        }
    }
}

/// The Frappe `{"message": ...}` envelope around whitelisted returns.
/// A missing `message` key decodes to `None`; no bound on `T` beyond
/// `Deserialize` so the client's generic call path stays open.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub message: Option<T>,
}

/// Plain `{success, message?}` payload shared by the adopt, test-print, and
/// invoice-print endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CallStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<CallStatus> for RpcOutcome<()> {
    fn from(status: CallStatus) -> Self {
        if status.success {
            Self::Ok(())
        } else {
            Self::Err {
                message: status.message,
            }
        }
    }
}

/// Payload of the discovery-listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct DiscoveryPayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub printers: Vec<DiscoveredPrinter>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_discovered: u64,
    #[serde(default)]
    pub new_printers: u64,
}

impl From<DiscoveryPayload> for RpcOutcome<Vec<DiscoveredPrinter>> {
    fn from(payload: DiscoveryPayload) -> Self {
        if payload.success {
            Self::Ok(payload.printers)
        } else {
            Self::Err {
                message: payload.message,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_message() {
        let raw = r#"{"message": {"success": true}}"#;
        let env: Envelope<CallStatus> = serde_json::from_str(raw).unwrap();
        let outcome: RpcOutcome<()> = env.message.unwrap().into();
        assert!(outcome.is_ok());
    }

    #[test]
    fn failure_without_message_decodes_to_none() {
        let raw = r#"{"success": false}"#;
        let status: CallStatus = serde_json::from_str(raw).unwrap();
        let outcome: RpcOutcome<()> = status.into();
        assert_eq!(outcome, RpcOutcome::Err { message: None });
        assert_eq!(outcome.err_message_or("fallback"), "fallback");
    }

    #[test]
    fn failure_with_message_keeps_server_text() {
        let raw = r#"{"success": false, "message": "Imprimante 00:11:62:12:34:56 already exists"}"#;
        let status: CallStatus = serde_json::from_str(raw).unwrap();
        let outcome: RpcOutcome<()> = status.into();
        assert_eq!(
            outcome.err_message_or("fallback"),
            "Imprimante 00:11:62:12:34:56 already exists"
        );
    }

    #[test]
    fn discovery_payload_decodes_printers() {
        let raw = r#"{
            "success": true,
            "printers": [
                {"mac_address": "00:11:62:12:34:56", "ip_address": "192.168.1.100",
                 "client_type": "Star mC-Print3", "poll_count": 5,
                 "status_code": "200 OK", "time_since_first_seen": "42s ago"},
                {"mac_address": "00:11:62:ab:cd:ef", "ip_address": "192.168.1.101",
                 "client_type": "Star TSP100IV", "poll_count": 12}
            ],
            "total_discovered": 3,
            "new_printers": 2
        }"#;
        let payload: DiscoveryPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.new_printers, 2);
        match RpcOutcome::from(payload) {
            RpcOutcome::Ok(printers) => {
                assert_eq!(printers.len(), 2);
                assert_eq!(printers[1].client_type, "Star TSP100IV");
            }
            RpcOutcome::Err { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn discovery_payload_tolerates_unknown_fields() {
        let raw = r#"{"success": true, "printers": [], "some_future_field": 1}"#;
        let payload: DiscoveryPayload = serde_json::from_str(raw).unwrap();
        assert!(payload.printers.is_empty());
    }

    #[test]
    fn absent_envelope_message_is_none() {
        let raw = r#"{}"#;
        let env: Envelope<CallStatus> = serde_json::from_str(raw).unwrap();
        assert!(env.message.is_none());
    }

    #[test]
    fn envelope_needs_no_default_on_its_payload() {
        // DiscoveredPrinter has no Default impl; the envelope must still
        // decode around it.
        let raw = r#"{"message": {"mac_address": "00:11:62:AB:CD:EF"}}"#;
        let env: Envelope<DiscoveredPrinter> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            env.message.unwrap().mac_address.as_str(),
            "00:11:62:AB:CD:EF"
        );
    }
}
