// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Remote-call layer for the CloudPRNT server: wire protocol and HTTP client.

pub mod client;
pub mod protocol;

pub use client::{CloudprntRpc, HttpRpcClient};
pub use protocol::RpcOutcome;
