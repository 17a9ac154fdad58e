// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Headline figures and the current work-in-progress count.

use serde::Serialize;
use std::collections::BTreeSet;

use super::cycle_time::CycleTime;
use super::support::SupportMetrics;
use crate::issue::Issue;
use crate::status::StatusCatalog;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Summary {
    pub total_issues: usize,
    /// Issues whose cycle time could be measured.
    pub completed: usize,
    pub average_cycle_days: f64,
    pub median_cycle_days: f64,
    pub p85_cycle_days: f64,
    /// Issues currently in a WIP status.
    pub wip_count: usize,
    pub wip_statuses: Vec<String>,
    pub avg_mtta_hours: f64,
    pub avg_mttr_hours: f64,
}

/// Statuses considered work in progress: the whole universe minus every
/// boundary set.
///
/// Statuses that are in no group and no boundary count as WIP.
pub fn wip_statuses(catalog: &StatusCatalog, boundaries: &[&BTreeSet<String>]) -> BTreeSet<String> {
    catalog
        .ids()
        .filter(|id| !boundaries.iter().any(|set| set.contains(*id)))
        .map(str::to_string)
        .collect()
}

/// Bundles cycle-time and support figures with the current WIP count.
pub fn summarize(
    issues: &[Issue],
    wip: &BTreeSet<String>,
    cycle: &CycleTime,
    support: &SupportMetrics,
) -> Summary {
    let wip_count = issues
        .iter()
        .filter_map(Issue::current_status_id)
        .filter(|id| wip.contains(*id))
        .count();

    Summary {
        total_issues: issues.len(),
        completed: cycle.durations.len(),
        average_cycle_days: cycle.average_days,
        median_cycle_days: cycle.p50_days,
        p85_cycle_days: cycle.p85_days,
        wip_count,
        wip_statuses: wip.iter().cloned().collect(),
        avg_mtta_hours: support.avg_mtta_hours,
        avg_mttr_hours: support.avg_mttr_hours,
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
