// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! flowrs - flow metrics for issue-tracker exports.
//!
//! This crate provides the `flow` CLI on top of [`flow_core`]: it loads an
//! issue export and a flow configuration, runs a metrics pass, and renders the
//! result as text or JSON.
//!
//! # Main Components
//!
//! - [`Config`] - Status universe, groups, flow boundaries and date range
//! - [`Cli`] / [`Command`] - Command-line surface
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use flowrs::{run, Cli};
//!
//! let cli = Cli::parse();
//! run(cli.command)?;
//! ```

mod cli;
mod commands;
mod display;
mod env;

pub mod config;
pub mod error;
pub mod logging;
pub mod timings;

pub use cli::{Cli, Command, InputArgs, OutputFormat, RangeArgs, SelectorArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Report {
            input,
            range,
            selectors,
            now,
            output,
        } => commands::report::run(&input, &range, selectors, now.as_deref(), output),
        Command::Timeline { input, key, output } => {
            commands::timeline::run(&input, key.as_deref(), output)
        }
        Command::Schema => commands::schema::run(),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "flow", &mut std::io::stdout());
            Ok(())
        }
    }
}
