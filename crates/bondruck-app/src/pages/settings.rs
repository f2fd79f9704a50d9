// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — the CloudPRNT Settings view: discovered-printer review,
// test print dispatch, and client configuration.

use dioxus::prelude::*;

use bondruck_core::i18n::{text, Msg};
use bondruck_flow::test_print::TestPrintForm;
use bondruck_flow::{discovery, refresh, test_print};

use crate::services::app_services::AppServices;
use crate::state::{AdoptPrompt, AppState, SignalSink};

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let lang = svc.lang();
    let mut save_msg = use_signal(|| Option::<String>::None);

    // When a flow requests a record reload, fire the server-side refresh
    // hook and re-fetch the snapshot so the adopted printer becomes visible.
    let mut handled_reloads = use_signal(|| 0u64);
    {
        let svc = svc.clone();
        use_effect(move || {
            let pending = state.read().pending_reloads;
            if pending > *handled_reloads.peek() {
                handled_reloads.set(pending);
                let svc = svc.clone();
                spawn(async move {
                    let rpc = svc.rpc();
                    refresh::refresh_printer_list(rpc.as_ref()).await;
                    match svc.load_settings().await {
                        Ok(snapshot) => state.write().settings = snapshot,
                        Err(e) => tracing::warn!(error = %e, "settings reload failed"),
                    }
                });
            }
        });
    }

    let discover_label = text(lang, Msg::DiscoverPrintersButton);
    let test_label = text(lang, Msg::TestPrinterButton);
    let printer_field_label = text(lang, Msg::PrinterFieldLabel);
    let default_printer = state.read().settings.default_printer.clone();
    let printer_count = state.read().settings.printers.len();

    rsx! {
        div { style: "max-width: 640px; margin: 0 auto;",
            h1 { "CloudPRNT" }

            section { style: "margin: 16px 0;",
                p { style: "color: #666; font-size: 14px;",
                    if default_printer.is_empty() {
                        "—"
                    } else {
                        "{printer_field_label}: {default_printer}"
                    }
                }
                if printer_count > 0 {
                    p { style: "color: #999; font-size: 13px;", "{printer_count} imprimante(s)" }
                }
            }

            div { style: "display: flex; gap: 12px; margin: 16px 0;",
                button {
                    style: "flex: 1; padding: 14px; border-radius: 10px; border: none; background: #007aff; color: white; font-size: 16px;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let rpc = svc.rpc();
                            let lang = svc.lang();
                            let mut sink = SignalSink(state);
                            spawn(async move {
                                discovery::review_discovered_printers(rpc.as_ref(), lang, &mut sink)
                                    .await;
                            });
                        }
                    },
                    "{discover_label}"
                }
                button {
                    style: "flex: 1; padding: 14px; border-radius: 10px; border: 1px solid #007aff; background: white; color: #007aff; font-size: 16px;",
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let form =
                                test_print::prepare_test_print(&state.peek().settings, svc.lang());
                            let mut st = state.write();
                            st.test_dialog = Some(form);
                            st.test_printer_missing = false;
                        }
                    },
                    "{test_label}"
                }
            }

            ConfigSection { save_msg }
        }

        if let Some(table) = state.read().review.clone() {
            ReviewDialog { table }
        }
        if let Some(prompt) = state.read().adopt_prompt.clone() {
            AdoptDialog { prompt }
        }
        if let Some(form) = state.read().test_dialog.clone() {
            TestPrintDialog { form }
        }
    }
}

/// Modal table of discovered printers awaiting adoption.
#[component]
fn ReviewDialog(table: bondruck_flow::ReviewTable) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let close_label = text(svc.lang(), Msg::Close);
    let adopt_label = text(svc.lang(), Msg::AdoptAction);

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center;",
            div { style: "background: white; border-radius: 12px; padding: 24px; min-width: 560px;",
                h3 { style: "margin: 0 0 16px 0;", "{table.title}" }
                table { style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                    thead {
                        tr {
                            th { style: "text-align: left; padding: 6px; border-bottom: 2px solid #e0e0e0;", "MAC Address" }
                            th { style: "text-align: left; padding: 6px; border-bottom: 2px solid #e0e0e0;", "Type" }
                            th { style: "text-align: left; padding: 6px; border-bottom: 2px solid #e0e0e0;", "IP" }
                            th { style: "text-align: left; padding: 6px; border-bottom: 2px solid #e0e0e0;", "Polls" }
                            th { style: "border-bottom: 2px solid #e0e0e0;" }
                        }
                    }
                    tbody {
                        for row in table.rows.iter() {
                            {
                                let mac = row.mac_address.clone();
                                rsx! {
                                    tr {
                                        td { style: "padding: 6px; border-bottom: 1px solid #f0f0f0;",
                                            code { "{row.mac_address}" }
                                        }
                                        td { style: "padding: 6px; border-bottom: 1px solid #f0f0f0;", "{row.client_type}" }
                                        td { style: "padding: 6px; border-bottom: 1px solid #f0f0f0;", "{row.ip_address}" }
                                        td { style: "padding: 6px; border-bottom: 1px solid #f0f0f0;", "{row.poll_count}" }
                                        td { style: "padding: 6px; border-bottom: 1px solid #f0f0f0;",
                                            button {
                                                style: "padding: 4px 12px; border-radius: 6px; border: none; background: #007aff; color: white; font-size: 13px;",
                                                onclick: move |_| {
                                                    state.write().adopt_prompt = Some(AdoptPrompt {
                                                        mac_address: mac.clone(),
                                                        label: String::new(),
                                                        label_missing: false,
                                                    });
                                                },
                                                "{adopt_label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                button {
                    style: "margin-top: 16px; padding: 8px 20px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    onclick: move |_| { state.write().review = None; },
                    "{close_label}"
                }
            }
        }
    }
}

/// Per-printer adoption prompt: a required label, then the remote call.
#[component]
fn AdoptDialog(prompt: AdoptPrompt) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let lang = svc.lang();
    let title = text(lang, Msg::AdoptPrinterTitle);
    let field_label = text(lang, Msg::PrinterNameLabel);
    let adopt_label = text(lang, Msg::AdoptAction);
    let close_label = text(lang, Msg::Close);
    let border = if prompt.label_missing {
        "2px solid #ff3b30"
    } else {
        "2px solid #ccc"
    };

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center;",
            div { style: "background: white; border-radius: 12px; padding: 24px; min-width: 360px;",
                h3 { style: "margin: 0 0 8px 0;", "{title}" }
                p { style: "color: #999; font-size: 13px; margin: 0 0 16px 0;",
                    code { "{prompt.mac_address}" }
                }
                label { style: "display: block; font-size: 14px; font-weight: bold; margin-bottom: 6px;",
                    "{field_label} *"
                }
                input {
                    r#type: "text",
                    required: true,
                    value: "{prompt.label}",
                    style: "width: 100%; padding: 10px; font-size: 15px; border: {border}; border-radius: 8px; box-sizing: border-box;",
                    oninput: move |evt| {
                        if let Some(p) = state.write().adopt_prompt.as_mut() {
                            p.label = evt.value().to_string();
                            p.label_missing = false;
                        }
                    },
                }
                div { style: "display: flex; gap: 8px; margin-top: 16px;",
                    button {
                        style: "flex: 1; padding: 10px; border-radius: 8px; border: none; background: #007aff; color: white;",
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let Some(prompt) = state.peek().adopt_prompt.clone() else {
                                    return;
                                };
                                let rpc = svc.rpc();
                                let lang = svc.lang();
                                let mut sink = SignalSink(state);
                                spawn(async move {
                                    let result = discovery::adopt_printer(
                                        rpc.as_ref(),
                                        lang,
                                        &prompt.mac_address,
                                        &prompt.label,
                                        &mut sink,
                                    )
                                    .await;
                                    if result.is_err() {
                                        if let Some(p) = state.write().adopt_prompt.as_mut() {
                                            p.label_missing = true;
                                        }
                                    }
                                });
                            }
                        },
                        "{adopt_label}"
                    }
                    button {
                        style: "flex: 1; padding: 10px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                        onclick: move |_| { state.write().adopt_prompt = None; },
                        "{close_label}"
                    }
                }
            }
        }
    }
}

/// Test-print dialog. Confirming closes it immediately; the outcome
/// arrives later as a transient alert.
#[component]
fn TestPrintDialog(form: TestPrintForm) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let lang = svc.lang();
    let title = text(lang, Msg::TestPrintTitle);
    let printer_label = text(lang, Msg::PrinterFieldLabel);
    let text_label = text(lang, Msg::TestTextLabel);
    let print_label = text(lang, Msg::PrintAction);
    let close_label = text(lang, Msg::Close);
    let border = if state.read().test_printer_missing {
        "2px solid #ff3b30"
    } else {
        "2px solid #ccc"
    };

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center;",
            div { style: "background: white; border-radius: 12px; padding: 24px; min-width: 400px;",
                h3 { style: "margin: 0 0 16px 0;", "{title}" }
                label { style: "display: block; font-size: 14px; font-weight: bold; margin-bottom: 6px;",
                    "{printer_label} *"
                }
                input {
                    r#type: "text",
                    required: true,
                    value: "{form.printer}",
                    style: "width: 100%; padding: 10px; font-size: 15px; border: {border}; border-radius: 8px; box-sizing: border-box; margin-bottom: 12px;",
                    oninput: move |evt| {
                        let mut st = state.write();
                        if let Some(f) = st.test_dialog.as_mut() {
                            f.printer = evt.value().to_string();
                        }
                        st.test_printer_missing = false;
                    },
                }
                label { style: "display: block; font-size: 14px; font-weight: bold; margin-bottom: 6px;",
                    "{text_label}"
                }
                input {
                    r#type: "text",
                    value: "{form.test_text}",
                    style: "width: 100%; padding: 10px; font-size: 15px; border: 2px solid #ccc; border-radius: 8px; box-sizing: border-box;",
                    oninput: move |evt| {
                        if let Some(f) = state.write().test_dialog.as_mut() {
                            f.test_text = evt.value().to_string();
                        }
                    },
                }
                div { style: "display: flex; gap: 8px; margin-top: 16px;",
                    button {
                        style: "flex: 1; padding: 10px; border-radius: 8px; border: none; background: #007aff; color: white;",
                        onclick: {
                            let svc = svc.clone();
                            move |_| {
                                let Some(form) = state.peek().test_dialog.clone() else {
                                    return;
                                };
                                let rpc = svc.rpc();
                                let lang = svc.lang();
                                let mut sink = SignalSink(state);
                                spawn(async move {
                                    let result =
                                        test_print::submit_test_print(rpc.as_ref(), lang, form, &mut sink)
                                            .await;
                                    if result.is_err() {
                                        state.write().test_printer_missing = true;
                                    }
                                });
                            }
                        },
                        "{print_label}"
                    }
                    button {
                        style: "flex: 1; padding: 10px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                        onclick: move |_| { state.write().test_dialog = None; },
                        "{close_label}"
                    }
                }
            }
        }
    }
}

/// Client configuration: server URL and language, persisted locally.
#[component]
fn ConfigSection(save_msg: Signal<Option<String>>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = save_msg;

    rsx! {
        section { style: "margin: 24px 0;",
            h3 { "Configuration" }
            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                span { "Serveur" }
                input {
                    r#type: "text",
                    style: "width: 280px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                    value: "{state.read().config.server_url}",
                    onchange: move |evt| {
                        state.write().config.server_url = evt.value().to_string();
                    },
                }
            }
            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                span { "Langue" }
                select {
                    style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                    onchange: move |evt| {
                        state.write().config.language = match evt.value().as_str() {
                            "en" => bondruck_core::i18n::Lang::En,
                            _ => bondruck_core::i18n::Lang::Fr,
                        };
                    },
                    option { value: "fr", "Français" }
                    option { value: "en", "English" }
                }
            }
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                tracing::info!("settings saved");
                                save_msg.set(Some("Enregistré.".into()));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                save_msg.set(Some(format!("Échec: {e}")));
                            }
                        }
                    }
                },
                "Enregistrer"
            }
            if let Some(ref msg) = *save_msg.read() {
                p { style: "color: #34c759; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }
        }
    }
}
