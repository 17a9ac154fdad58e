// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cycle time: days from entering the start boundary to reaching the end
//! boundary.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

use super::stats::{mean, percentile};
use super::MS_PER_DAY;
use crate::timeline::Timeline;

/// One completed issue, for drill-down.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CycleTimeRecord {
    pub key: String,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub days: f64,
}

/// A histogram bucket covering `[lower, upper)` days.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct HistogramBucket {
    /// e.g. `"3-3.5 days"`.
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CycleTime {
    /// Durations in days, ascending.
    pub durations: Vec<f64>,
    pub records: Vec<CycleTimeRecord>,
    pub histogram: Vec<HistogramBucket>,
    pub average_days: f64,
    pub p50_days: f64,
    pub p85_days: f64,
}

/// Measures cycle time for every timeline that crossed both boundaries.
///
/// The start is the first entry in `start`; the end is the first entry at or
/// after the start whose status is in `end`. Either set being empty yields
/// the zeroed default.
pub fn cycle_time(timelines: &[Timeline], start: &BTreeSet<String>, end: &BTreeSet<String>) -> CycleTime {
    if start.is_empty() || end.is_empty() {
        return CycleTime::default();
    }

    let mut records: Vec<CycleTimeRecord> = timelines
        .iter()
        .filter_map(|timeline| {
            let (start_idx, started) = timeline.first_in(start, 0)?;
            let (_, finished) = timeline.first_in(end, start_idx)?;
            if finished.at < started.at {
                return None;
            }
            Some(CycleTimeRecord {
                key: timeline.key.clone(),
                started: started.at,
                finished: finished.at,
                days: (finished.at - started.at).num_milliseconds() as f64 / MS_PER_DAY,
            })
        })
        .collect();
    records.sort_by(|a, b| a.days.total_cmp(&b.days).then_with(|| a.key.cmp(&b.key)));

    let durations: Vec<f64> = records.iter().map(|r| r.days).collect();

    CycleTime {
        histogram: histogram(&durations),
        average_days: mean(&durations),
        p50_days: percentile(&durations, 50.0),
        p85_days: percentile(&durations, 85.0),
        durations,
        records,
    }
}

/// Bucket width for a sample whose largest value is `max` days.
pub(crate) fn bucket_width(max: f64) -> f64 {
    if max > 100.0 {
        10.0
    } else if max > 20.0 {
        2.0
    } else if max > 10.0 {
        1.0
    } else if max > 1.0 {
        0.5
    } else {
        0.1
    }
}

/// Builds contiguous buckets from 0 up to the bucket holding the maximum.
fn histogram(sorted: &[f64]) -> Vec<HistogramBucket> {
    let Some(&max) = sorted.last() else {
        return Vec::new();
    };
    let width = bucket_width(max);
    let bucket_of = |days: f64| (days / width + 1e-9).floor().max(0.0) as usize;

    let mut buckets: Vec<HistogramBucket> = (0..=bucket_of(max))
        .map(|i| {
            let lower = round_tenth(i as f64 * width);
            let upper = round_tenth((i + 1) as f64 * width);
            HistogramBucket {
                label: format!("{}-{} days", format_bound(lower), format_bound(upper)),
                lower,
                upper,
                count: 0,
            }
        })
        .collect();

    for &days in sorted {
        if let Some(bucket) = buckets.get_mut(bucket_of(days)) {
            bucket.count += 1;
        }
    }
    buckets
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn format_bound(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{}", x as i64)
    } else {
        format!("{x:.1}")
    }
}

#[cfg(test)]
#[path = "cycle_time_tests.rs"]
mod tests;
