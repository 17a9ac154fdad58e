// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Accumulated time spent in each status and group.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::status::{GroupIndex, StatusCatalog};
use crate::timeline::Timeline;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StatusTime {
    pub status_id: String,
    pub name: String,
    pub total_ms: i64,
    /// `total_ms` divided by the whole issue population.
    pub average_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct GroupTime {
    pub group: String,
    pub total_ms: i64,
    pub average_ms: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TimeInStatus {
    /// Denominator for every average.
    pub issue_count: usize,
    pub by_status: Vec<StatusTime>,
    pub by_group: Vec<GroupTime>,
    /// Intervals dropped for having a negative duration.
    pub negative_intervals: usize,
}

/// Sums the time every timeline spent in each status, closing the last
/// interval at `now`.
///
/// Zero-length intervals are skipped silently; negative ones are logged and
/// skipped. Averages divide by the number of timelines, not by the number
/// of issues that visited a status.
pub fn time_in_status(
    timelines: &[Timeline],
    catalog: &StatusCatalog,
    groups: &GroupIndex,
    now: DateTime<Utc>,
) -> TimeInStatus {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    let mut negative_intervals = 0;

    for timeline in timelines {
        for (status_id, elapsed_ms) in timeline.intervals(now) {
            if elapsed_ms < 0 {
                tracing::warn!(key = %timeline.key, status = status_id, elapsed_ms, "negative interval, skipping");
                negative_intervals += 1;
                continue;
            }
            if elapsed_ms == 0 {
                continue;
            }
            *totals.entry(status_id).or_default() += elapsed_ms;
        }
    }

    let issue_count = timelines.len();
    let average = |total: i64| {
        if issue_count == 0 {
            0.0
        } else {
            total as f64 / issue_count as f64
        }
    };

    let by_status = totals
        .iter()
        .map(|(&id, &total_ms)| StatusTime {
            status_id: id.to_string(),
            name: catalog.name(id).unwrap_or(id).to_string(),
            total_ms,
            average_ms: average(total_ms),
        })
        .collect();

    let by_group = groups
        .order()
        .iter()
        .map(|group| {
            let total_ms = groups
                .members(group)
                .map(|members| {
                    members
                        .iter()
                        .map(|id| totals.get(id.as_str()).copied().unwrap_or(0))
                        .sum()
                })
                .unwrap_or(0);
            GroupTime {
                group: group.clone(),
                total_ms,
                average_ms: average(total_ms),
            }
        })
        .collect();

    TimeInStatus {
        issue_count,
        by_status,
        by_group,
        negative_intervals,
    }
}

#[cfg(test)]
#[path = "time_in_status_tests.rs"]
mod tests;
