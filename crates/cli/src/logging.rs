// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.
//!
//! The engine reports skipped issues and unresolvable configuration through
//! `tracing`. The CLI routes those events to stderr so stdout stays clean
//! for report output.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Level used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = env::log_filter()
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
