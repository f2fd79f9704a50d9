// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bondruck — CloudPRNT receipt-printer management client
//
// Entry point. Initialises logging and services, then launches the Dioxus
// UI. Notices (transient alerts, blocking modals, info banners) are
// rendered once here in the layout so every page shares them.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use bondruck_flow::Indicator;

use pages::invoice::Invoice;
use pages::settings::Settings;
use services::app_services::AppServices;
use state::AppState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Bondruck starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(TabLayout)]
    #[route("/")]
    Settings {},
    #[route("/invoice")]
    Invoice {},
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(AppServices::init);

    use_context_provider(|| svc.clone());
    let mut state = use_context_provider(|| Signal::new(AppState::new(svc.config())));

    // Fetch the settings record snapshot once at startup. Failure is
    // tolerated — the operator can still open dialogs against an empty
    // snapshot.
    let svc_boot = svc.clone();
    use_hook(move || {
        spawn(async move {
            match svc_boot.load_settings().await {
                Ok(snapshot) => state.write().settings = snapshot,
                Err(e) => tracing::warn!(error = %e, "initial settings fetch failed"),
            }
        });
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent layout: tab bar plus the shared notice surfaces.
#[component]
fn TabLayout() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    // Tick down transient alerts once per second.
    let _ticker = use_resource(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            if !state.peek().alerts.is_empty() {
                let mut st = state.write();
                for alert in st.alerts.iter_mut() {
                    alert.remaining = alert.remaining.saturating_sub(1);
                }
                st.alerts.retain(|alert| alert.remaining > 0);
            }
        }
    });

    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }

            // Transient alerts (bottom-right, auto-dismissed)
            div { style: "position: fixed; bottom: 64px; right: 16px; display: flex; flex-direction: column; gap: 8px;",
                for alert in state.read().alerts.iter() {
                    div { style: "padding: 10px 16px; border-radius: 8px; color: white; font-size: 14px; background: {indicator_bg(alert.notice.indicator)};",
                        "{alert.notice.body}"
                    }
                }
            }

            // Informational banner (dismissible, non-blocking)
            if let Some(ref notice) = state.read().info.clone() {
                div { style: "position: fixed; top: 16px; left: 50%; transform: translateX(-50%); padding: 12px 20px; border-radius: 8px; background: #e7f1ff; border: 1px solid #b6d4fe; color: #084298; font-size: 14px; display: flex; gap: 16px; align-items: center;",
                    div {
                        if let Some(ref title) = notice.title {
                            strong { "{title}" }
                            br {}
                        }
                        "{notice.body}"
                    }
                    button {
                        style: "border: none; background: none; color: #084298; font-size: 16px;",
                        onclick: move |_| { state.write().info = None; },
                        "×"
                    }
                }
            }

            // Blocking modal
            if let Some(ref notice) = state.read().blocking.clone() {
                div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center;",
                    div { style: "background: white; border-radius: 12px; padding: 24px; min-width: 320px; max-width: 480px;",
                        if let Some(ref title) = notice.title {
                            h3 { style: "margin: 0 0 12px 0; color: {indicator_bg(notice.indicator)};", "{title}" }
                        }
                        p { style: "margin: 0 0 16px 0;", "{notice.body}" }
                        button {
                            style: "padding: 8px 20px; border-radius: 8px; border: none; background: #007aff; color: white;",
                            onclick: move |_| { state.write().blocking = None; },
                            "OK"
                        }
                    }
                }
            }

            // Bottom tab bar
            nav { class: "tab-bar",
                style: "display: flex; justify-content: space-around; padding: 8px 0; border-top: 1px solid #e0e0e0; background: #fafafa;",
                TabButton { to: Route::Settings {}, label: "Imprimantes", icon: "P" }
                TabButton { to: Route::Invoice {}, label: "Facture", icon: "F" }
            }
        }
    }
}

#[component]
fn TabButton(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "display: flex; flex-direction: column; align-items: center; text-decoration: none; color: #333; font-size: 12px;",
            span { style: "font-size: 20px;", "{icon}" }
            span { "{label}" }
        }
    }
}

fn indicator_bg(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Green => "#34c759",
        Indicator::Red => "#ff3b30",
        Indicator::Blue => "#007aff",
    }
}
