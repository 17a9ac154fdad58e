// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Daily throughput: issues reaching the end boundary per calendar day.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::calendar::{day_key, DateRange};
use crate::timeline::Timeline;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DailyCount {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Throughput {
    /// One row per day of the range, zero-filled.
    pub days: Vec<DailyCount>,
    pub total: usize,
}

/// Counts, per UTC day in `range`, the issues whose first entry into `end`
/// fell on that day.
pub fn throughput(timelines: &[Timeline], end: &BTreeSet<String>, range: &DateRange) -> Throughput {
    let days = range.days();
    if days.is_empty() {
        return Throughput::default();
    }

    let mut counts: BTreeMap<NaiveDate, usize> = days.iter().map(|d| (*d, 0)).collect();
    if !end.is_empty() {
        for timeline in timelines {
            let Some((_, resolved)) = timeline.first_in(end, 0) else {
                continue;
            };
            let day = resolved.at.date_naive();
            if !range.contains(day) {
                continue;
            }
            if let Some(count) = counts.get_mut(&day) {
                *count += 1;
            }
        }
    }

    let total = counts.values().sum();
    let days = counts
        .into_iter()
        .map(|(date, count)| DailyCount {
            date: day_key(date),
            count,
        })
        .collect();

    Throughput { days, total }
}

#[cfg(test)]
#[path = "throughput_tests.rs"]
mod tests;
