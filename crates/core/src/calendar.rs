// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar-day helpers for per-day metrics.
//!
//! All days are UTC calendar days.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Longest range, in days, that per-day metrics will expand.
pub const MAX_RANGE_DAYS: i64 = 1000;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting one that ends before it starts.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(DateRange { start, end })
    }

    /// Parses a range from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        DateRange::new(parse_date(start)?, parse_date(end)?)
    }

    /// Number of days in the range, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Every day in the range, in order.
    ///
    /// Returns an empty list for inverted ranges and for ranges longer than
    /// [`MAX_RANGE_DAYS`].
    pub fn days(&self) -> Vec<NaiveDate> {
        let len = self.len_days();
        if len <= 0 {
            return Vec::new();
        }
        if len > MAX_RANGE_DAYS {
            tracing::warn!(start = %self.start, end = %self.end, days = len, "date range too long, skipping per-day metrics");
            return Vec::new();
        }
        self.start.iter_days().take(len as usize).collect()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

/// The last millisecond of `day` (`23:59:59.999Z`).
pub fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    let last_ms = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default();
    day.and_time(last_ms).and_utc()
}

/// Formats a calendar day as `YYYY-MM-DD`, the key used by per-day rows.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
