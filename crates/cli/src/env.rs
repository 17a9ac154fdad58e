// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `FLOW_TIMINGS` is set (any value).
pub fn flow_timings() -> bool {
    std::env::var(vars::FLOW_TIMINGS).is_ok()
}

/// Returns the value of `RUST_LOG` if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::RUST_LOG).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
