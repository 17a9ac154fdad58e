// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The metrics pass: validate inputs, build timelines, resolve boundaries,
//! run every aggregator, and assemble the result.
//!
//! A pass holds no state beyond its own call. Lookup tables are built from
//! the request and dropped with the result.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregate::{
    cumulative_flow, cycle_time, distribution, summarize, support_metrics, throughput,
    time_in_status, wip_statuses, CumulativeFlow, CycleTime, Distribution, Summary,
    SupportMetrics, Throughput, TimeInStatus,
};
use crate::calendar::DateRange;
use crate::clock::ClockSource;
use crate::issue::Issue;
use crate::selector::{resolve_selector, FlowConfig};
use crate::status::{GroupIndex, Status, StatusCatalog, StatusGroup};
use crate::timeline::{build_timeline, Timeline};

/// Everything one metrics pass consumes.
#[derive(Debug, Clone, Copy)]
pub struct MetricsRequest<'a> {
    pub issues: &'a [Issue],
    pub groups: &'a [StatusGroup],
    pub statuses: &'a [Status],
    pub range: DateRange,
    pub flow: &'a FlowConfig,
}

/// How much of the input survived timeline building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Diagnostics {
    pub issues_received: usize,
    pub timelines_built: usize,
    pub issues_skipped: usize,
}

/// The combined output of a metrics pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct MetricsResult {
    /// The "now" used to close open intervals.
    pub generated_at: DateTime<Utc>,
    pub range: DateRange,
    pub distribution: Distribution,
    pub time_in_status: TimeInStatus,
    pub cycle_time: CycleTime,
    pub throughput: Throughput,
    pub cumulative_flow: CumulativeFlow,
    pub support: SupportMetrics,
    pub summary: Summary,
    /// Status id to the names of every group containing it.
    pub status_groups: BTreeMap<String, Vec<String>>,
    /// Status id to display name.
    pub status_names: BTreeMap<String, String>,
    pub diagnostics: Diagnostics,
}

/// Builds a timeline for every issue, returning the timelines and the number
/// of issues that had to be skipped.
pub fn build_timelines(issues: &[Issue], catalog: &StatusCatalog) -> (Vec<Timeline>, usize) {
    let timelines: Vec<Timeline> = issues
        .iter()
        .filter_map(|issue| build_timeline(issue, catalog))
        .collect();
    let skipped = issues.len() - timelines.len();
    (timelines, skipped)
}

/// Runs every metric over the request.
///
/// Returns `None` when there are no issues or no statuses. Unset or
/// unresolvable selectors do not fail the pass; the metrics depending on
/// them come back zeroed.
pub fn process_metrics<C: ClockSource>(
    request: &MetricsRequest<'_>,
    clock: &C,
) -> Option<MetricsResult> {
    if request.issues.is_empty() {
        tracing::warn!("no issues to process");
        return None;
    }
    let catalog = StatusCatalog::new(request.statuses);
    if catalog.is_empty() {
        tracing::warn!("no statuses to process against");
        return None;
    }

    let now = clock.now();
    let groups = GroupIndex::new(request.groups, &catalog);

    let (timelines, skipped) = build_timelines(request.issues, &catalog);
    if skipped > 0 {
        tracing::warn!(skipped, total = request.issues.len(), "issues excluded from timeline metrics");
    }

    let flow = request.flow;
    let triage = resolve_selector(flow.triage.as_ref(), &groups, &catalog);
    let start = resolve_selector(flow.cycle_start.as_ref(), &groups, &catalog);
    let end = resolve_selector(flow.cycle_end.as_ref(), &groups, &catalog);

    let cycle = cycle_time(&timelines, &start, &end);
    let support = support_metrics(&timelines, &triage, &end);
    let wip = wip_statuses(&catalog, &[&triage, &start, &end]);
    let summary = summarize(request.issues, &wip, &cycle, &support);

    let result = MetricsResult {
        generated_at: now,
        range: request.range,
        distribution: distribution(request.issues, &catalog, &groups),
        time_in_status: time_in_status(&timelines, &catalog, &groups, now),
        throughput: throughput(&timelines, &end, &request.range),
        cumulative_flow: cumulative_flow(&timelines, &groups, groups.order(), &request.range, now),
        cycle_time: cycle,
        support,
        summary,
        status_groups: groups.by_status().clone(),
        status_names: catalog.names().clone(),
        diagnostics: Diagnostics {
            issues_received: request.issues.len(),
            timelines_built: timelines.len(),
            issues_skipped: skipped,
        },
    };

    tracing::debug!(
        issues = result.diagnostics.issues_received,
        timelines = result.diagnostics.timelines_built,
        completed = result.summary.completed,
        "metrics pass complete"
    );

    Some(result)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
