// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metric aggregators.
//!
//! Each aggregator is a pure function over built timelines (or raw issues
//! for current-state snapshots) and resolved status sets. Anything that
//! needs the end of an open interval takes `now` as an argument.

mod cfd;
mod cycle_time;
mod distribution;
mod stats;
mod summary;
mod support;
mod throughput;
mod time_in_status;

pub use cfd::{cumulative_flow, CfdRow, CumulativeFlow};
pub use cycle_time::{cycle_time, CycleTime, CycleTimeRecord, HistogramBucket};
pub use distribution::{distribution, Distribution, GroupShare, StatusShare};
pub use stats::{mean, median, percentile};
pub use summary::{summarize, wip_statuses, Summary};
pub use support::{support_metrics, SupportMetrics};
pub use throughput::{throughput, DailyCount, Throughput};
pub use time_in_status::{time_in_status, GroupTime, StatusTime, TimeInStatus};

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;

/// `count / total * 100`, or 0 when there is nothing to divide by.
fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
