// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{InputArgs, RangeArgs, SelectorArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "flow")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Flow metrics for issue-tracker exports")]
#[command(
    long_about = "Flow metrics for issue-tracker exports.\n\n\
    Reconstructs each issue's status timeline from its changelog and reports \
    status distribution, time in status, cycle time, throughput, cumulative flow, \
    and support SLAs (MTTA/MTTR)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute flow metrics for an issue export
    #[command(after_help = "\
Examples:
  flow report -i issues.json                       Use ./flow.toml for statuses and groups
  flow report -i issues.json -c team.json -o json  Full result as JSON
  flow report -i issues.json --start 2024-01-01 --end 2024-01-31
  flow report -i issues.json --cycle-start group:Active --cycle-end status:10002
  flow report -i issues.json --now 2024-02-01T00:00:00Z   Reproducible output")]
    Report {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        selectors: SelectorArgs,

        /// Pin "now" (RFC 3339) instead of reading the system clock
        #[arg(long, value_name = "timestamp")]
        now: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show reconstructed status timelines
    Timeline {
        #[command(flatten)]
        input: InputArgs,

        /// Only show this issue
        key: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the JSON Schema of the report output
    Schema,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
