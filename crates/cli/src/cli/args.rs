// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` so every command reads
//! its inputs the same way.

use clap::Args;
use std::path::PathBuf;

use flow_core::Selector;

use crate::config::DEFAULT_CONFIG_FILE;

/// Where to read issues and flow configuration from.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// Issue export (JSON array or search response with an "issues" array)
    #[arg(long, short, value_name = "file")]
    pub issues: PathBuf,

    /// Flow configuration (TOML, or JSON by extension)
    #[arg(long, short, value_name = "file", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Reporting range overrides.
#[derive(Args, Clone, Debug, Default)]
pub struct RangeArgs {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long, value_name = "date")]
    pub start: Option<String>,

    /// Last day of the range, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "date")]
    pub end: Option<String>,
}

/// Flow boundary overrides, as `group:<name>` or `status:<id>`.
#[derive(Args, Clone, Debug, Default)]
pub struct SelectorArgs {
    /// Triage / acknowledgement boundary
    #[arg(long, value_name = "selector")]
    pub triage: Option<Selector>,

    /// Cycle start boundary
    #[arg(long, value_name = "selector")]
    pub cycle_start: Option<Selector>,

    /// Cycle end / resolution boundary
    #[arg(long, value_name = "selector")]
    pub cycle_end: Option<Selector>,
}
