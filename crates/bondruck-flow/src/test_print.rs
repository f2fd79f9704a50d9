// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Test print dispatch.
//
// The dialog is fire-and-forget: confirming closes it immediately, and the
// outcome arrives later as a transient notice. Only the printer field is
// validated, as required.

use tracing::error;

use bondruck_core::error::{BondruckError, Result};
use bondruck_core::i18n::{text, Lang, Msg};
use bondruck_core::types::{SettingsSnapshot, TestPrintRequest};
use bondruck_rpc::{CloudprntRpc, RpcOutcome};

use crate::ui::{Notice, UiAction, UiSink};

/// How long test-print outcome alerts stay up, in seconds.
const TEST_PRINT_ALERT_SECONDS: u8 = 5;

/// Pre-filled contents of the test-print dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct TestPrintForm {
    /// Registered printer to test; required. Defaults to the record's
    /// configured default printer when one exists.
    pub printer: String,
    /// Free-text sample content, pre-filled with a fixed default.
    pub test_text: String,
}

/// Build the dialog's initial state from the settings record snapshot.
pub fn prepare_test_print(settings: &SettingsSnapshot, lang: Lang) -> TestPrintForm {
    TestPrintForm {
        printer: settings.default_printer_label().unwrap_or_default().to_owned(),
        test_text: text(lang, Msg::TestPrintDefaultText).to_owned(),
    }
}

/// Submit the test print. Closes the dialog before awaiting the response.
pub async fn submit_test_print(
    rpc: &dyn CloudprntRpc,
    lang: Lang,
    form: TestPrintForm,
    ui: &mut dyn UiSink,
) -> Result<()> {
    if form.printer.trim().is_empty() {
        return Err(BondruckError::NoPrinterSelected);
    }

    ui.push(UiAction::CloseDialog);

    let request = TestPrintRequest {
        printer: form.printer,
        test_text: form.test_text,
    };

    match rpc.send_test_print(&request).await {
        Ok(RpcOutcome::Ok(())) => {
            ui.push(UiAction::Alert {
                notice: Notice::success(text(lang, Msg::TestPrintSent)),
                seconds: TEST_PRINT_ALERT_SECONDS,
            });
        }
        Ok(outcome @ RpcOutcome::Err { .. }) => {
            let body = format!(
                "{}{}",
                text(lang, Msg::ErrorPrefix),
                outcome.err_message_or(text(lang, Msg::UnknownError)),
            );
            ui.push(UiAction::Alert {
                notice: Notice {
                    title: None,
                    body,
                    indicator: crate::ui::Indicator::Red,
                },
                seconds: TEST_PRINT_ALERT_SECONDS,
            });
        }
        Err(e) => {
            error!(error = %e, printer = %request.printer, "test print call failed");
            ui.push(UiAction::Alert {
                notice: Notice {
                    title: None,
                    body: format!(
                        "{}{}",
                        text(lang, Msg::ErrorPrefix),
                        text(lang, Msg::UnknownError),
                    ),
                    indicator: crate::ui::Indicator::Red,
                },
                seconds: TEST_PRINT_ALERT_SECONDS,
            });
        }
    }
    Ok(())
}
