// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer-list refresh hook. The response is opaque and only ever logged;
// nothing is surfaced to the operator.

use tracing::{info, warn};

use bondruck_rpc::CloudprntRpc;

/// Trigger the server-side printer-list refresh.
pub async fn refresh_printer_list(rpc: &dyn CloudprntRpc) {
    match rpc.refresh_printer_list().await {
        Ok(response) => info!(%response, "printer list refresh triggered"),
        Err(e) => warn!(error = %e, "printer list refresh failed"),
    }
}
