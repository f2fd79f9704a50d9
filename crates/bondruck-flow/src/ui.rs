// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// UI-action model.
//
// Flows never touch a concrete widget toolkit. They push `UiAction` values
// into a `UiSink`; the hosting UI (Dioxus desktop here, anything else
// elsewhere) interprets them. Ordering within one flow is push order.

use bondruck_core::i18n::{text, Lang, Msg};
use bondruck_core::types::{DiscoveredPrinter, MacAddress};

/// Colour cue for a notice, matching the server UI's indicator convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Green,
    Red,
    Blue,
}

/// An operator-facing notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: Option<String>,
    pub body: String,
    pub indicator: Indicator,
}

impl Notice {
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
            indicator: Indicator::Green,
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: body.into(),
            indicator: Indicator::Red,
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: body.into(),
            indicator: Indicator::Blue,
        }
    }
}

/// One row of the discovered-printer review table. Field values are carried
/// through from the server response unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRow {
    pub mac_address: MacAddress,
    pub client_type: String,
    pub ip_address: String,
    pub poll_count: u64,
}

impl From<&DiscoveredPrinter> for ReviewRow {
    fn from(printer: &DiscoveredPrinter) -> Self {
        Self {
            mac_address: printer.mac_address.clone(),
            client_type: printer.client_type.clone(),
            ip_address: printer.ip_address.clone(),
            poll_count: printer.poll_count,
        }
    }
}

/// Structured view model of the review dialog — an ordered sequence of row
/// records for whatever templating layer the hosting UI provides.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewTable {
    pub title: String,
    pub rows: Vec<ReviewRow>,
}

impl ReviewTable {
    pub fn new(lang: Lang, printers: &[DiscoveredPrinter]) -> Self {
        Self {
            title: text(lang, Msg::DiscoveredPrintersTitle).to_owned(),
            rows: printers.iter().map(ReviewRow::from).collect(),
        }
    }
}

/// A single UI action requested by a flow.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Transient notice, auto-dismissed after `seconds`.
    Alert { notice: Notice, seconds: u8 },
    /// Blocking notice the operator must dismiss.
    MsgPrint(Notice),
    /// Non-blocking informational notice.
    Info(Notice),
    /// Open the discovered-printer review dialog.
    OpenReviewTable(ReviewTable),
    /// Close the currently open dialog or prompt.
    CloseDialog,
    /// Reload the hosting record so changes become visible.
    ReloadRecord,
}

/// Where flows deliver their UI actions.
pub trait UiSink {
    fn push(&mut self, action: UiAction);
}
