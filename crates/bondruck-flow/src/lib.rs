// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// View-scoped workflows over the CloudPRNT remote calls.
//
// Each flow is an independent reaction to one user-initiated UI event: it
// takes a record snapshot, a remote-call client, and a UI-action sink, and
// pushes a description of what the hosting UI should do. No flow calls
// another, and no two flows share mutable state.

pub mod discovery;
pub mod invoice;
pub mod refresh;
pub mod test_print;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use ui::{Indicator, Notice, ReviewRow, ReviewTable, UiAction, UiSink};
