// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline command implementation.
//!
//! Shows the status timeline each issue reconstructs to, which is what every
//! report metric is computed from.

use chrono::{DateTime, Utc};

use flow_core::{build_timeline, ClockSource, Issue, StatusCatalog, SystemClock, Timeline};

use crate::cli::{InputArgs, OutputFormat};
use crate::display::format_timeline;
use crate::error::{Error, Result};

use super::load_inputs;

/// Run the timeline command.
pub fn run(input: &InputArgs, key: Option<&str>, output: OutputFormat) -> Result<()> {
    let (issues, config) = load_inputs(input)?;
    let catalog = StatusCatalog::new(&config.statuses);
    let timelines = select(&issues, &catalog, key)?;
    println!("{}", render(&timelines, &catalog, output, SystemClock.now())?);
    Ok(())
}

/// Builds timelines for the issues matching `key` (all issues when `None`).
pub(crate) fn select(
    issues: &[Issue],
    catalog: &StatusCatalog,
    key: Option<&str>,
) -> Result<Vec<Timeline>> {
    match key {
        Some(key) => {
            let issue = issues
                .iter()
                .find(|issue| issue.key == key)
                .ok_or_else(|| Error::IssueNotFound(key.to_string()))?;
            Ok(build_timeline(issue, catalog).into_iter().collect())
        }
        None => Ok(issues
            .iter()
            .filter_map(|issue| build_timeline(issue, catalog))
            .collect()),
    }
}

pub(crate) fn render(
    timelines: &[Timeline],
    catalog: &StatusCatalog,
    output: OutputFormat,
    now: DateTime<Utc>,
) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(timelines)?),
        OutputFormat::Text => {
            let blocks: Vec<String> = timelines
                .iter()
                .map(|timeline| format_timeline(timeline, catalog.names(), now).join("\n"))
                .collect();
            Ok(blocks.join("\n\n"))
        }
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
