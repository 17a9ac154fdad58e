// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod report;
pub mod schema;
pub mod timeline;

use std::fs;
use std::path::Path;

use flow_core::Issue;

use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::{Error, Result};

/// Loads the issue export and configuration named by `input`.
pub fn load_inputs(input: &InputArgs) -> Result<(Vec<Issue>, Config)> {
    let config = crate::time_phase!("input::config", { Config::load(&input.config)? });
    let issues = crate::time_phase!("input::issues", { load_issues(&input.issues)? });
    tracing::debug!(
        issues = issues.len(),
        statuses = config.statuses.len(),
        groups = config.groups.len(),
        "inputs loaded"
    );
    Ok((issues, config))
}

/// Reads and parses an issue export.
pub fn load_issues(path: &Path) -> Result<Vec<Issue>> {
    let issues_error = |reason: String| Error::Issues {
        path: path.display().to_string(),
        reason,
    };
    let content = fs::read_to_string(path).map_err(|e| issues_error(e.to_string()))?;
    flow_core::parse_issues(&content).map_err(|e| issues_error(e.to_string()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
