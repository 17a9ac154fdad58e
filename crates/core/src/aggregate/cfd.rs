// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cumulative flow: per-day population of each status group.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::calendar::{day_key, end_of_day, DateRange};
use crate::status::GroupIndex;
use crate::timeline::Timeline;

/// One day's snapshot. Serializes flat as `{ "date": ..., "<group>": n, ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CfdRow {
    pub date: String,
    #[serde(flatten)]
    pub counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CumulativeFlow {
    /// Stacking order of the groups.
    pub groups: Vec<String>,
    pub rows: Vec<CfdRow>,
}

/// Snapshots, for each day in `range`, which group every issue sat in at
/// the last millisecond of the day (or at `now`, if earlier).
///
/// Groups missing from `group_order` are not counted.
pub fn cumulative_flow(
    timelines: &[Timeline],
    groups: &GroupIndex,
    group_order: &[String],
    range: &DateRange,
    now: DateTime<Utc>,
) -> CumulativeFlow {
    let zeroed: BTreeMap<String, usize> = group_order.iter().map(|g| (g.clone(), 0)).collect();

    let rows = range
        .days()
        .into_iter()
        .map(|day| {
            let snapshot = end_of_day(day).min(now);
            let mut counts = zeroed.clone();
            for timeline in timelines {
                let Some(status_id) = timeline.status_at(snapshot) else {
                    continue;
                };
                for group in groups.groups_of(status_id) {
                    if let Some(count) = counts.get_mut(group) {
                        *count += 1;
                    }
                }
            }
            CfdRow {
                date: day_key(day),
                counts,
            }
        })
        .collect();

    CumulativeFlow {
        groups: group_order.to_vec(),
        rows,
    }
}

#[cfg(test)]
#[path = "cfd_tests.rs"]
mod tests;
