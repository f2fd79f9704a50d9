// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Bondruck CloudPRNT client.
//
// Everything here is a transient, view-scoped snapshot: discovered printers
// live only for the duration of a review dialog, request structs are built
// from dialog input, sent once, and discarded.

use serde::{Deserialize, Serialize};

use crate::error::{BondruckError, Result};

/// A printer's MAC address — the unique identifier the CloudPRNT server
/// keys every printer by.
///
/// The server accepts both colon form (`00:11:62:12:34:56`, used in doc
/// records and RPC arguments) and dot form (`00.11.62.12.34.56`, used in
/// polling URLs). The server-supplied spelling is kept verbatim: adoption
/// is an exact-key lookup on the server side, so the value shown in a
/// review row and the value sent back must be the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
    /// Validate a MAC address made of colon- or dot-separated hex pairs.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let sep = if raw.contains(':') { ':' } else { '.' };
        let groups: Vec<&str> = raw.split(sep).collect();
        if groups.len() != 6
            || groups
                .iter()
                .any(|g| g.len() != 2 || !g.chars().all(|c| c.is_ascii_hexdigit()))
        {
            return Err(BondruckError::InvalidMac(raw.to_owned()));
        }
        Ok(Self(raw.to_owned()))
    }

    /// The address exactly as the server supplied it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for MacAddress {
    type Err = BondruckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = BondruckError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

/// A printer that has polled the server but has no registered record yet.
///
/// Produced by the server's discovery endpoint; read-only for the lifetime
/// of one review dialog. Ceases to be "discovered" once adopted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredPrinter {
    pub mac_address: MacAddress,
    #[serde(default)]
    pub client_type: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub poll_count: u64,
    /// Last HTTP status the printer reported while polling.
    #[serde(default)]
    pub status_code: Option<String>,
    /// Human-readable age of the discovery, e.g. "42s ago".
    #[serde(default)]
    pub time_since_first_seen: Option<String>,
}

/// A row of the settings record's registered-printer table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredPrinter {
    pub label: String,
    pub mac_address: MacAddress,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default, with = "int_bool")]
    pub online: bool,
}

/// Snapshot of the hosting CloudPRNT Settings record, as the flows see it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    #[serde(default)]
    pub default_printer: String,
    #[serde(default, with = "int_bool")]
    pub enable_auto_print: bool,
    #[serde(default)]
    pub default_paper_width: String,
    #[serde(default)]
    pub header_logo_url: String,
    #[serde(default)]
    pub footer_logo_url: String,
    /// Registered printers; not populated by every endpoint.
    #[serde(default)]
    pub printers: Vec<RegisteredPrinter>,
}

impl SettingsSnapshot {
    /// The configured default printer, if any is set.
    pub fn default_printer_label(&self) -> Option<&str> {
        let label = self.default_printer.trim();
        (!label.is_empty()).then_some(label)
    }
}

/// Submission state of a document record (Frappe docstatus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DocStatus {
    Draft,
    Submitted,
    Cancelled,
}

impl DocStatus {
    /// Whether the record is finalized, i.e. permits receipt printing.
    pub fn is_finalized(self) -> bool {
        self == Self::Submitted
    }
}

impl TryFrom<u8> for DocStatus {
    type Error = String;

    fn try_from(code: u8) -> std::result::Result<Self, String> {
        match code {
            0 => Ok(Self::Draft),
            1 => Ok(Self::Submitted),
            2 => Ok(Self::Cancelled),
            other => Err(format!("unknown docstatus {other}")),
        }
    }
}

impl From<DocStatus> for u8 {
    fn from(status: DocStatus) -> u8 {
        match status {
            DocStatus::Draft => 0,
            DocStatus::Submitted => 1,
            DocStatus::Cancelled => 2,
        }
    }
}

/// Snapshot of the POS invoice record hosting the receipt button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    pub name: String,
    pub docstatus: DocStatus,
}

/// Arguments for adopting a discovered printer. Sent once, then discarded.
#[derive(Debug, Clone, Serialize)]
pub struct AdoptionRequest {
    pub mac_address: MacAddress,
    pub label: String,
}

/// Arguments for a test print. Sent once, then discarded.
#[derive(Debug, Clone, Serialize)]
pub struct TestPrintRequest {
    pub printer: String,
    pub test_text: String,
}

/// Arguments for printing an invoice receipt. Sent once, then discarded.
#[derive(Debug, Clone, Serialize)]
pub struct InvoicePrintRequest {
    pub invoice_name: String,
}

/// Frappe serialises check fields as 0/1 rather than JSON booleans.
mod int_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrBool {
        Int(u8),
        Bool(bool),
    }

    pub fn serialize<S: Serializer>(value: &bool, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
        Ok(match IntOrBool::deserialize(de)? {
            IntOrBool::Int(n) => n != 0,
            IntOrBool::Bool(b) => b,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_parses_colon_form() {
        let mac = MacAddress::parse("00:11:62:12:34:56").unwrap();
        assert_eq!(mac.as_str(), "00:11:62:12:34:56");
    }

    #[test]
    fn mac_parses_dot_form() {
        let mac = MacAddress::parse("00.11.62.12.34.56").unwrap();
        assert_eq!(mac.as_str(), "00.11.62.12.34.56");
    }

    #[test]
    fn mac_keeps_server_casing_verbatim() {
        // The server registers polled printers under uppercase colon keys
        // and adoption is an exact-key lookup, so the spelling must survive
        // the round trip untouched.
        let mac = MacAddress::parse("00:11:62:AB:CD:EF").unwrap();
        assert_eq!(mac.as_str(), "00:11:62:AB:CD:EF");
        assert_eq!(String::from(mac), "00:11:62:AB:CD:EF");
    }

    #[test]
    fn mac_decoded_from_wire_displays_the_wire_value() {
        let mac: MacAddress = serde_json::from_str(r#""00:11:62:AB:CD:EF""#).unwrap();
        assert_eq!(mac.to_string(), "00:11:62:AB:CD:EF");
    }

    #[test]
    fn mac_rejects_garbage() {
        assert!(MacAddress::parse("").is_err());
        assert!(MacAddress::parse("00:11:62:12:34").is_err());
        assert!(MacAddress::parse("zz:11:62:12:34:56").is_err());
        assert!(MacAddress::parse("0011:62:12:34:56:78").is_err());
    }

    #[test]
    fn discovered_printer_decodes_server_payload() {
        let json = r#"{
            "mac_address": "00:11:62:12:34:56",
            "ip_address": "192.168.1.100",
            "client_type": "Star mC-Print3",
            "status_code": "200 OK",
            "poll_count": 5,
            "time_since_first_seen": "42s ago"
        }"#;
        let printer: DiscoveredPrinter = serde_json::from_str(json).unwrap();
        assert_eq!(printer.client_type, "Star mC-Print3");
        assert_eq!(printer.poll_count, 5);
        assert_eq!(printer.status_code.as_deref(), Some("200 OK"));
    }

    #[test]
    fn discovered_printer_tolerates_missing_optionals() {
        let json = r#"{"mac_address": "00:11:62:12:34:56"}"#;
        let printer: DiscoveredPrinter = serde_json::from_str(json).unwrap();
        assert_eq!(printer.poll_count, 0);
        assert!(printer.status_code.is_none());
    }

    #[test]
    fn settings_snapshot_decodes_frappe_ints() {
        let json = r#"{
            "default_printer": "Caisse 1",
            "enable_auto_print": 1,
            "default_paper_width": "80mm",
            "printers": [
                {"label": "Caisse 1", "mac_address": "00:11:62:12:34:56", "online": 1}
            ]
        }"#;
        let snap: SettingsSnapshot = serde_json::from_str(json).unwrap();
        assert!(snap.enable_auto_print);
        assert!(snap.printers[0].online);
        assert_eq!(snap.default_printer_label(), Some("Caisse 1"));
    }

    #[test]
    fn check_fields_accept_both_int_and_bool_spellings() {
        let snap: SettingsSnapshot =
            serde_json::from_str(r#"{"enable_auto_print": 1}"#).unwrap();
        assert!(snap.enable_auto_print);
        let snap: SettingsSnapshot =
            serde_json::from_str(r#"{"enable_auto_print": false}"#).unwrap();
        assert!(!snap.enable_auto_print);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["enable_auto_print"], 0);
    }

    #[test]
    fn empty_default_printer_is_none() {
        let snap = SettingsSnapshot::default();
        assert_eq!(snap.default_printer_label(), None);
    }

    #[test]
    fn docstatus_round_trips() {
        for (code, status) in [
            (0u8, DocStatus::Draft),
            (1, DocStatus::Submitted),
            (2, DocStatus::Cancelled),
        ] {
            assert_eq!(DocStatus::try_from(code).unwrap(), status);
            assert_eq!(u8::from(status), code);
        }
        assert!(DocStatus::try_from(3).is_err());
        assert!(DocStatus::Submitted.is_finalized());
        assert!(!DocStatus::Draft.is_finalized());
    }
}
