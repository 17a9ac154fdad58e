// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary statistics over sorted samples.

/// Nearest-rank percentile of an ascending slice.
///
/// Index is `ceil(p / 100 * n) - 1`, clamped to the slice. Returns 0 for an
/// empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (p / 100.0 * sorted.len() as f64).ceil() as i64 - 1;
    let idx = rank.clamp(0, sorted.len() as i64 - 1) as usize;
    sorted[idx]
}

/// Median of an ascending slice, as the 50th nearest-rank percentile.
pub fn median(sorted: &[f64]) -> f64 {
    percentile(sorted, 50.0)
}

/// Arithmetic mean, or 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
