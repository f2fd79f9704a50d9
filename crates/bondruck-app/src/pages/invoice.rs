// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Invoice page. The operator enters (or navigates to) a POS invoice; the
// thermal receipt button appears only once the invoice is submitted.

use dioxus::prelude::*;

use bondruck_core::i18n::{text, Msg};
use bondruck_core::types::{DocStatus, InvoiceSnapshot};
use bondruck_flow::invoice as invoice_flow;

use crate::services::app_services::AppServices;
use crate::state::{AppState, SignalSink};

#[component]
pub fn Invoice() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let lang = svc.lang();

    let current = state.read().invoice.clone();
    let name = current.as_ref().map(|i| i.name.clone()).unwrap_or_default();
    let docstatus = current
        .as_ref()
        .map(|i| i.docstatus)
        .unwrap_or(DocStatus::Draft);

    let receipt_label = text(lang, Msg::ReceiptButton);
    let group_label = text(lang, Msg::ReceiptButtonGroup);
    let show_button = current
        .as_ref()
        .map(invoice_flow::receipt_button_visible)
        .unwrap_or(false);

    rsx! {
        div { style: "max-width: 640px; margin: 0 auto;",
            h1 { "Facture" }

            section { style: "margin: 16px 0;",
                label { style: "display: block; font-size: 14px; font-weight: bold; margin-bottom: 6px;",
                    "Facture POS"
                }
                input {
                    r#type: "text",
                    placeholder: "ACC-PSINV-2026-00001",
                    value: "{name}",
                    style: "width: 100%; padding: 10px; font-size: 15px; border: 2px solid #ccc; border-radius: 8px; box-sizing: border-box; margin-bottom: 12px;",
                    oninput: move |evt| {
                        let name = evt.value().to_string();
                        let mut st = state.write();
                        match st.invoice.as_mut() {
                            Some(inv) => inv.name = name,
                            None => {
                                st.invoice = Some(InvoiceSnapshot {
                                    name,
                                    docstatus: DocStatus::Draft,
                                });
                            }
                        }
                    },
                }

                label { style: "display: block; font-size: 14px; font-weight: bold; margin-bottom: 6px;",
                    "Statut"
                }
                select {
                    style: "padding: 8px; border: 1px solid #ccc; border-radius: 8px; font-size: 15px;",
                    onchange: move |evt| {
                        let docstatus = match evt.value().as_str() {
                            "1" => DocStatus::Submitted,
                            "2" => DocStatus::Cancelled,
                            _ => DocStatus::Draft,
                        };
                        if let Some(inv) = state.write().invoice.as_mut() {
                            inv.docstatus = docstatus;
                        }
                    },
                    option { value: "0", selected: docstatus == DocStatus::Draft, "Brouillon" }
                    option { value: "1", selected: docstatus == DocStatus::Submitted, "Validé" }
                    option { value: "2", selected: docstatus == DocStatus::Cancelled, "Annulé" }
                }
            }

            if show_button {
                section { style: "margin: 24px 0;",
                    p { style: "color: #999; font-size: 13px; margin: 0 0 8px 0;", "{group_label}" }
                    button {
                        style: "width: 100%; padding: 14px; border-radius: 10px; border: none; background: #1c1c1e; color: white; font-size: 16px;",
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let Some(invoice) = state.peek().invoice.clone() else {
                                    return;
                                };
                                let rpc = svc.rpc();
                                let lang = svc.lang();
                                let mut sink = SignalSink(state);
                                spawn(async move {
                                    invoice_flow::print_receipt(rpc.as_ref(), lang, &invoice, &mut sink)
                                        .await;
                                });
                            }
                        },
                        "{receipt_label}"
                    }
                }
            }
        }
    }
}
