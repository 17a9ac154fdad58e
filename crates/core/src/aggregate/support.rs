// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Support SLAs: mean time to acknowledge (MTTA) and to resolve (MTTR).

use serde::Serialize;
use std::collections::BTreeSet;

use super::stats::mean;
use super::MS_PER_HOUR;
use crate::timeline::Timeline;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SupportMetrics {
    pub avg_mtta_hours: f64,
    pub avg_mttr_hours: f64,
    /// Issues contributing to the MTTA average.
    pub acknowledged: usize,
    /// Issues contributing to the MTTR average.
    pub resolved: usize,
}

/// Averages acknowledgement and resolution times, in hours.
///
/// Acknowledgement is the first transition (after creation) into a status
/// outside `triage`. Resolution is the first entry into `end`. An empty set
/// zeroes the corresponding average.
pub fn support_metrics(
    timelines: &[Timeline],
    triage: &BTreeSet<String>,
    end: &BTreeSet<String>,
) -> SupportMetrics {
    let mut mtta = Vec::new();
    let mut mttr = Vec::new();

    for timeline in timelines {
        let Some(created) = timeline.created() else {
            continue;
        };
        let hours_since_created = |at: chrono::DateTime<chrono::Utc>| {
            let ms = (at - created).num_milliseconds();
            (ms >= 0).then(|| ms as f64 / MS_PER_HOUR)
        };

        if !triage.is_empty() {
            if let Some(hours) = timeline
                .first_outside(triage, 1)
                .and_then(|(_, e)| hours_since_created(e.at))
            {
                mtta.push(hours);
            }
        }
        if !end.is_empty() {
            if let Some(hours) = timeline
                .first_in(end, 0)
                .and_then(|(_, e)| hours_since_created(e.at))
            {
                mttr.push(hours);
            }
        }
    }

    SupportMetrics {
        avg_mtta_hours: mean(&mtta),
        avg_mttr_hours: mean(&mttr),
        acknowledged: mtta.len(),
        resolved: mttr.len(),
    }
}

#[cfg(test)]
#[path = "support_tests.rs"]
mod tests;
