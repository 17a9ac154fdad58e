// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for flow-core operations.
//!
//! The metrics engine itself degrades instead of failing; these errors cover
//! the parsing helpers at the ingestion boundary.

use thiserror::Error;

/// All possible errors that can occur in flow-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid selector type: '{0}'\n  hint: valid types are: group, status")]
    InvalidSelectorKind(String),

    #[error("invalid date: '{0}'\n  hint: expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid timestamp: '{0}'\n  hint: expected RFC 3339, e.g. 2024-01-15T10:00:00Z")]
    InvalidTimestamp(String),

    #[error("invalid date range: {start} is after {end}")]
    InvalidRange { start: String, end: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flow-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
