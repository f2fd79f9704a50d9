// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Invoice receipt printing.
//
// The receipt button exists only on finalized invoices. A failed print is
// not surfaced to the operator — it is logged and nothing else happens.

use tracing::{info, warn};

use bondruck_core::i18n::{text, Lang, Msg};
use bondruck_core::types::{InvoicePrintRequest, InvoiceSnapshot};
use bondruck_rpc::{CloudprntRpc, RpcOutcome};

use crate::ui::{Notice, UiAction, UiSink};

/// How long the receipt-sent alert stays up, in seconds.
const RECEIPT_ALERT_SECONDS: u8 = 5;

/// Whether the receipt button is rendered for this invoice at all.
pub fn receipt_button_visible(invoice: &InvoiceSnapshot) -> bool {
    invoice.docstatus.is_finalized()
}

/// Ask the server to print a receipt for the invoice.
pub async fn print_receipt(
    rpc: &dyn CloudprntRpc,
    lang: Lang,
    invoice: &InvoiceSnapshot,
    ui: &mut dyn UiSink,
) {
    let request = InvoicePrintRequest {
        invoice_name: invoice.name.clone(),
    };

    match rpc.print_invoice(&request).await {
        Ok(RpcOutcome::Ok(())) => {
            info!(invoice = %request.invoice_name, "receipt sent");
            ui.push(UiAction::Alert {
                notice: Notice::success(text(lang, Msg::ReceiptSent)),
                seconds: RECEIPT_ALERT_SECONDS,
            });
        }
        // Failure is deliberately silent towards the operator; keep a trace.
        Ok(RpcOutcome::Err { message }) => {
            warn!(
                invoice = %request.invoice_name,
                message = message.as_deref().unwrap_or("<none>"),
                "receipt print rejected by server",
            );
        }
        Err(e) => {
            warn!(invoice = %request.invoice_name, error = %e, "receipt print call failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSink, ScriptedRpc};
    use bondruck_core::types::DocStatus;

    fn invoice(docstatus: DocStatus) -> InvoiceSnapshot {
        InvoiceSnapshot {
            name: "ACC-PSINV-2026-00042".into(),
            docstatus,
        }
    }

    #[test]
    fn button_only_on_finalized_invoices() {
        assert!(receipt_button_visible(&invoice(DocStatus::Submitted)));
        assert!(!receipt_button_visible(&invoice(DocStatus::Draft)));
        assert!(!receipt_button_visible(&invoice(DocStatus::Cancelled)));
    }

    #[tokio::test]
    async fn success_shows_exactly_one_transient_notice() {
        let rpc = ScriptedRpc::default().with_invoice(Ok(RpcOutcome::Ok(())));
        let mut sink = RecordingSink::default();

        print_receipt(&rpc, Lang::Fr, &invoice(DocStatus::Submitted), &mut sink).await;

        assert_eq!(
            sink.actions,
            vec![UiAction::Alert {
                notice: Notice::success("Ticket envoyé à l'imprimante"),
                seconds: 5,
            }]
        );
    }

    #[tokio::test]
    async fn call_carries_the_invoice_identifier() {
        let rpc = ScriptedRpc::default().with_invoice(Ok(RpcOutcome::Ok(())));
        let mut sink = RecordingSink::default();

        print_receipt(&rpc, Lang::Fr, &invoice(DocStatus::Submitted), &mut sink).await;

        let calls = rpc.invoice_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].invoice_name, "ACC-PSINV-2026-00042");
    }

    #[tokio::test]
    async fn failure_is_silent_towards_the_operator() {
        let rpc = ScriptedRpc::default().with_invoice(Ok(RpcOutcome::Err {
            message: Some("Aucune imprimante par défaut configurée".into()),
        }));
        let mut sink = RecordingSink::default();

        print_receipt(&rpc, Lang::Fr, &invoice(DocStatus::Submitted), &mut sink).await;

        assert!(sink.actions.is_empty());
        assert_eq!(rpc.invoice_calls.lock().unwrap().len(), 1);
    }
}
