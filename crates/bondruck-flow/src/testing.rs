// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Test doubles shared by the flow tests: a scripted RPC stub and a
// recording UI sink.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use bondruck_core::error::Result;
use bondruck_core::types::{
    AdoptionRequest, DiscoveredPrinter, InvoicePrintRequest, SettingsSnapshot, TestPrintRequest,
};
use bondruck_rpc::{CloudprntRpc, RpcOutcome};

use crate::ui::{UiAction, UiSink};

/// RPC stub returning pre-scripted responses and recording every request.
///
/// Each scripted response is consumed by its first call; an unscripted call
/// panics, which marks a test driving an endpoint it did not mean to.
#[derive(Default)]
pub struct ScriptedRpc {
    list_response: Mutex<Option<Result<RpcOutcome<Vec<DiscoveredPrinter>>>>>,
    adopt_response: Mutex<Option<Result<RpcOutcome<()>>>>,
    test_print_response: Mutex<Option<Result<RpcOutcome<()>>>>,
    invoice_response: Mutex<Option<Result<RpcOutcome<()>>>>,
    pub adopt_calls: Mutex<Vec<AdoptionRequest>>,
    pub test_print_calls: Mutex<Vec<TestPrintRequest>>,
    pub invoice_calls: Mutex<Vec<InvoicePrintRequest>>,
    pub refresh_calls: AtomicUsize,
}

impl ScriptedRpc {
    pub fn with_list(self, response: Result<RpcOutcome<Vec<DiscoveredPrinter>>>) -> Self {
        *self.list_response.lock().unwrap() = Some(response);
        self
    }

    pub fn with_adopt(self, response: Result<RpcOutcome<()>>) -> Self {
        *self.adopt_response.lock().unwrap() = Some(response);
        self
    }

    pub fn with_test_print(self, response: Result<RpcOutcome<()>>) -> Self {
        *self.test_print_response.lock().unwrap() = Some(response);
        self
    }

    pub fn with_invoice(self, response: Result<RpcOutcome<()>>) -> Self {
        *self.invoice_response.lock().unwrap() = Some(response);
        self
    }
}

#[async_trait]
impl CloudprntRpc for ScriptedRpc {
    async fn list_discovered_printers(&self) -> Result<RpcOutcome<Vec<DiscoveredPrinter>>> {
        self.list_response
            .lock()
            .unwrap()
            .take()
            .expect("unscripted list_discovered_printers call")
    }

    async fn adopt_printer(&self, request: &AdoptionRequest) -> Result<RpcOutcome<()>> {
        self.adopt_calls.lock().unwrap().push(request.clone());
        self.adopt_response
            .lock()
            .unwrap()
            .take()
            .expect("unscripted adopt_printer call")
    }

    async fn send_test_print(&self, request: &TestPrintRequest) -> Result<RpcOutcome<()>> {
        self.test_print_calls.lock().unwrap().push(request.clone());
        self.test_print_response
            .lock()
            .unwrap()
            .take()
            .expect("unscripted send_test_print call")
    }

    async fn print_invoice(&self, request: &InvoicePrintRequest) -> Result<RpcOutcome<()>> {
        self.invoice_calls.lock().unwrap().push(request.clone());
        self.invoice_response
            .lock()
            .unwrap()
            .take()
            .expect("unscripted print_invoice call")
    }

    async fn fetch_settings(&self) -> Result<SettingsSnapshot> {
        Ok(SettingsSnapshot::default())
    }

    async fn refresh_printer_list(&self) -> Result<serde_json::Value> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        Ok(serde_json::json!({"refreshed": true}))
    }
}

/// Sink collecting every action a flow pushes, in order.
#[derive(Default)]
pub struct RecordingSink {
    pub actions: Vec<UiAction>,
}

impl UiSink for RecordingSink {
    fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }
}

/// Convenience constructor for discovery fixtures.
pub fn printer(mac: &str, client_type: &str, ip: &str, poll_count: u64) -> DiscoveredPrinter {
    DiscoveredPrinter {
        mac_address: mac.parse().expect("test MAC"),
        client_type: client_type.to_owned(),
        ip_address: ip.to_owned(),
        poll_count,
        status_code: Some("200 OK".to_owned()),
        time_since_first_seen: None,
    }
}
