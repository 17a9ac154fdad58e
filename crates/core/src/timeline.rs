// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline reconstruction from an issue's audit log.
//!
//! A [`Timeline`] is the ordered sequence of statuses an issue occupied,
//! each stamped with the instant it was entered. The first entry is the
//! status at creation; every later entry is a confirmed transition.
//!
//! Building a timeline never consults the clock. The final entry is left
//! open and aggregators close it at whatever "now" they were handed.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::issue::{parse_timestamp, Issue};
use crate::status::StatusCatalog;

/// A status transition extracted from the changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub at: DateTime<Utc>,
    pub from: String,
    pub to: String,
}

/// The moment an issue entered a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub at: DateTime<Utc>,
    pub status_id: String,
}

/// Chronological status occupancy of one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    /// Key of the issue this timeline was built from.
    pub key: String,
    /// Non-empty, non-decreasing in `at`; `entries[0].at` is the creation time.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// When the issue was created.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.entries.first().map(|e| e.at)
    }

    /// Finds the first entry at or after `from` whose status is in `set`.
    pub fn first_in(&self, set: &BTreeSet<String>, from: usize) -> Option<(usize, &TimelineEntry)> {
        self.entries
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, e)| set.contains(&e.status_id))
    }

    /// Finds the first entry at or after `from` whose status is not in `set`.
    pub fn first_outside(
        &self,
        set: &BTreeSet<String>,
        from: usize,
    ) -> Option<(usize, &TimelineEntry)> {
        self.entries
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, e)| !set.contains(&e.status_id))
    }

    /// Returns the status occupied at `instant`, or `None` if the issue did
    /// not exist yet.
    pub fn status_at(&self, instant: DateTime<Utc>) -> Option<&str> {
        let idx = self.entries.partition_point(|e| e.at <= instant);
        idx.checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|e| e.status_id.as_str())
    }

    /// Yields `(status_id, elapsed_ms)` for every interval, closing the last
    /// one at `now`. Elapsed time may be negative if `now` precedes the
    /// last entry.
    pub fn intervals(&self, now: DateTime<Utc>) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.entries.iter().enumerate().map(move |(i, entry)| {
            let end = self.entries.get(i + 1).map_or(now, |next| next.at);
            (
                entry.status_id.as_str(),
                (end - entry.at).num_milliseconds(),
            )
        })
    }
}

/// Extracts status transitions from an issue's changelog, oldest first.
///
/// History entries with a missing or unparseable timestamp are skipped
/// individually, as are items lacking either end of the transition.
pub fn status_changes(issue: &Issue) -> Vec<StatusChange> {
    let mut changes = Vec::new();

    for history in issue.histories() {
        let status_items: Vec<_> = history
            .items
            .iter()
            .filter(|item| item.is_status_change())
            .collect();
        if status_items.is_empty() {
            continue;
        }

        let at = match history.created.as_deref().map(parse_timestamp) {
            Some(Ok(at)) => at,
            Some(Err(e)) => {
                tracing::warn!(key = %issue.key, error = %e, "skipping audit entry with bad timestamp");
                continue;
            }
            None => {
                tracing::warn!(key = %issue.key, "skipping audit entry without timestamp");
                continue;
            }
        };

        for item in status_items {
            if let (Some(from), Some(to)) = (&item.from, &item.to) {
                changes.push(StatusChange {
                    at,
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }
    }

    // Stable: transitions sharing a timestamp keep changelog order.
    changes.sort_by_key(|c| c.at);
    changes
}

/// Reconstructs the status timeline of an issue.
///
/// Returns `None` when the creation timestamp is missing or unparseable, or
/// when the status at creation is unknown to `catalog`.
pub fn build_timeline(issue: &Issue, catalog: &StatusCatalog) -> Option<Timeline> {
    let created = match issue.fields.created.as_deref().map(parse_timestamp) {
        Some(Ok(at)) => at,
        Some(Err(e)) => {
            tracing::warn!(key = %issue.key, error = %e, "skipping issue with bad creation timestamp");
            return None;
        }
        None => {
            tracing::warn!(key = %issue.key, "skipping issue without creation timestamp");
            return None;
        }
    };

    let changes = status_changes(issue);

    let initial = match changes.first() {
        Some(first) => Some(first.from.as_str()),
        None => issue.current_status_id(),
    };
    let Some(initial) = initial.filter(|id| catalog.contains(id)) else {
        tracing::warn!(key = %issue.key, status = ?initial, "skipping issue with unknown initial status");
        return None;
    };

    let mut entries = vec![TimelineEntry {
        at: created,
        status_id: initial.to_string(),
    }];

    for change in changes {
        let unchanged = entries
            .last()
            .is_some_and(|last| last.status_id == change.to);
        if unchanged {
            continue;
        }
        if !catalog.contains(&change.to) {
            tracing::warn!(key = %issue.key, status = %change.to, "dropping transition to unknown status");
            continue;
        }
        // Entries stamped before creation are clamped so the timeline starts
        // at the creation instant.
        entries.push(TimelineEntry {
            at: change.at.max(created),
            status_id: change.to,
        });
    }

    Some(Timeline {
        key: issue.key.clone(),
        entries,
    })
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
