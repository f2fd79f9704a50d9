// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI — and the
// sink that applies flow-requested UI actions to it.

use dioxus::prelude::*;

use bondruck_core::types::{InvoiceSnapshot, SettingsSnapshot};
use bondruck_core::AppConfig;
use bondruck_flow::test_print::TestPrintForm;
use bondruck_flow::{Notice, ReviewTable, UiAction, UiSink};

/// A transient alert with its remaining display time.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAlert {
    pub notice: Notice,
    /// Seconds until auto-dismissal; counted down by the layout ticker.
    pub remaining: u8,
}

/// A pending adoption prompt for one discovered printer row.
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptPrompt {
    pub mac_address: bondruck_core::types::MacAddress,
    pub label: String,
    /// Required-field hint shown after a rejected submit.
    pub label_missing: bool,
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application settings.
    pub config: AppConfig,
    /// Snapshot of the hosting CloudPRNT Settings record.
    pub settings: SettingsSnapshot,
    /// Invoice record currently shown on the invoice page.
    pub invoice: Option<InvoiceSnapshot>,
    /// Transient alerts, newest last.
    pub alerts: Vec<ActiveAlert>,
    /// Blocking notice the operator must dismiss.
    pub blocking: Option<Notice>,
    /// Non-blocking informational banner.
    pub info: Option<Notice>,
    /// Open discovered-printer review dialog, if any.
    pub review: Option<ReviewTable>,
    /// Open adoption prompt, if any.
    pub adopt_prompt: Option<AdoptPrompt>,
    /// Open test-print dialog, if any.
    pub test_dialog: Option<TestPrintForm>,
    /// Required-field hint for the test-print printer field.
    pub test_printer_missing: bool,
    /// Incremented for every record reload a flow requests; the settings
    /// page watches it and re-fetches the snapshot.
    pub pending_reloads: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            settings: SettingsSnapshot::default(),
            invoice: None,
            alerts: Vec::new(),
            blocking: None,
            info: None,
            review: None,
            adopt_prompt: None,
            test_dialog: None,
            test_printer_missing: false,
            pending_reloads: 0,
        }
    }
}

/// `UiSink` over the shared state signal.
///
/// Flows run inside `spawn`ed futures; every pushed action becomes one
/// state mutation, which Dioxus turns into a re-render.
#[derive(Clone, Copy)]
pub struct SignalSink(pub Signal<AppState>);

impl UiSink for SignalSink {
    fn push(&mut self, action: UiAction) {
        let mut state = self.0.write();
        match action {
            UiAction::Alert { notice, seconds } => {
                state.alerts.push(ActiveAlert {
                    notice,
                    remaining: seconds,
                });
            }
            UiAction::MsgPrint(notice) => {
                state.blocking = Some(notice);
            }
            UiAction::Info(notice) => {
                state.info = Some(notice);
            }
            UiAction::OpenReviewTable(table) => {
                state.review = Some(table);
            }
            UiAction::CloseDialog => {
                state.adopt_prompt = None;
                state.review = None;
                state.test_dialog = None;
            }
            UiAction::ReloadRecord => {
                state.pending_reloads += 1;
            }
        }
    }
}
