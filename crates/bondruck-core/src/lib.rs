// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bondruck — Core types, errors, and configuration shared across all crates.

pub mod config;
pub mod error;
pub mod i18n;
pub mod types;

pub use config::AppConfig;
pub use error::BondruckError;
pub use types::*;
