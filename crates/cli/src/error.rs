// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the flowrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read issues from {path}: {reason}")]
    Issues { path: String, reason: String },

    #[error("{field} is required\n  hint: set it in the config file or pass --{flag}")]
    MissingField {
        field: &'static str,
        flag: &'static str,
    },

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("no metrics computed\n  hint: the issue file and the status list must both be non-empty")]
    NoMetrics,

    #[error(transparent)]
    Core(#[from] flow_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flowrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
