// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bondruck.

use thiserror::Error;

/// Top-level error type for all Bondruck operations.
#[derive(Debug, Error)]
pub enum BondruckError {
    // -- Remote call errors --
    #[error("transport failure calling {endpoint}: {detail}")]
    Transport { endpoint: String, detail: String },

    #[error("malformed response from {endpoint}: {detail}")]
    MalformedResponse { endpoint: String, detail: String },

    // -- Client-side validation --
    #[error("a printer label is required")]
    LabelRequired,

    #[error("no printer selected")]
    NoPrinterSelected,

    #[error("invalid MAC address: {0}")]
    InvalidMac(String),

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BondruckError>;
