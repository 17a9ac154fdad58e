// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use flow_core::{process_metrics, FixedClock, Issue, MetricsRequest, MetricsResult, SystemClock};

use crate::cli::{InputArgs, OutputFormat, RangeArgs, SelectorArgs};
use crate::config::Config;
use crate::display::format_report;
use crate::error::{Error, Result};

use super::load_inputs;

/// Run the report command.
pub fn run(
    input: &InputArgs,
    range: &RangeArgs,
    selectors: SelectorArgs,
    now: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let (issues, config) = load_inputs(input)?;
    let config = config.with_overrides(selectors.triage, selectors.cycle_start, selectors.cycle_end);
    let result = compute(&issues, &config, range, now)?;
    println!("{}", render(&result, output)?);
    Ok(())
}

/// Runs a metrics pass, pinning the clock when `now` is given.
pub(crate) fn compute(
    issues: &[Issue],
    config: &Config,
    range: &RangeArgs,
    now: Option<&str>,
) -> Result<MetricsResult> {
    let date_range = config.date_range(range.start.as_deref(), range.end.as_deref())?;
    let flow = config.flow();
    let request = MetricsRequest {
        issues,
        groups: &config.groups,
        statuses: &config.statuses,
        range: date_range,
        flow: &flow,
    };

    let result = crate::time_phase!("engine::process", {
        match now {
            Some(now) => {
                let clock = FixedClock::new(flow_core::parse_timestamp(now)?);
                process_metrics(&request, &clock)
            }
            None => process_metrics(&request, &SystemClock),
        }
    });
    result.ok_or(Error::NoMetrics)
}

pub(crate) fn render(result: &MetricsResult, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format_report(result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
