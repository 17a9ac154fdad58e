// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::Issue;
use crate::status::{Status, StatusGroup};
use crate::timeline::{build_timeline, TimelineEntry};
use chrono::TimeZone;

const HOUR_MS: i64 = 3_600_000;

fn catalog() -> StatusCatalog {
    StatusCatalog::new(&[
        Status::new("1", "Open"),
        Status::new("2", "In Progress"),
        Status::new("3", "Done"),
    ])
}

fn groups(catalog: &StatusCatalog) -> GroupIndex {
    GroupIndex::new(
        &[
            StatusGroup::new("Waiting", ["1"]),
            StatusGroup::new("Working", ["2"]),
            StatusGroup::new("Finished", ["3"]),
        ],
        catalog,
    )
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
}

fn timeline(issue: &Issue) -> Timeline {
    build_timeline(issue, &catalog()).unwrap()
}

#[test]
fn accumulates_per_status_and_group() {
    let catalog = catalog();
    let issue = Issue::new("A-1", "2024-01-01T00:00:00Z")
        .with_transition("2024-01-01T02:00:00Z", "1", "2")
        .with_transition("2024-01-01T08:00:00Z", "2", "3");

    let result = time_in_status(&[timeline(&issue)], &catalog, &groups(&catalog), now());

    let totals: Vec<_> = result
        .by_status
        .iter()
        .map(|s| (s.status_id.as_str(), s.total_ms))
        .collect();
    assert_eq!(totals, vec![("1", 2 * HOUR_MS), ("2", 6 * HOUR_MS), ("3", 16 * HOUR_MS)]);
    assert_eq!(result.by_group[1].group, "Working");
    assert_eq!(result.by_group[1].total_ms, 6 * HOUR_MS);
}

#[test]
fn grouped_total_equals_lifetime() {
    let catalog = catalog();
    let issue = Issue::new("A-2", "2024-01-01T00:00:00Z")
        .with_transition("2024-01-01T05:00:00Z", "1", "2")
        .with_transition("2024-01-01T07:30:00Z", "2", "1")
        .with_transition("2024-01-01T09:00:00Z", "1", "3");

    let result = time_in_status(&[timeline(&issue)], &catalog, &groups(&catalog), now());
    let sum: i64 = result.by_group.iter().map(|g| g.total_ms).sum();
    assert_eq!(sum, 24 * HOUR_MS);
}

#[test]
fn averages_divide_by_whole_population() {
    let catalog = catalog();
    let visited = Issue::new("A-3", "2024-01-01T00:00:00Z")
        .with_transition("2024-01-01T04:00:00Z", "1", "3");
    let stayed = Issue::new("A-4", "2024-01-01T00:00:00Z").with_status("3");

    let result = time_in_status(
        &[timeline(&visited), timeline(&stayed)],
        &catalog,
        &groups(&catalog),
        now(),
    );

    let open = result.by_status.iter().find(|s| s.status_id == "1").unwrap();
    assert_eq!(open.total_ms, 4 * HOUR_MS);
    assert_eq!(open.average_ms, 2.0 * HOUR_MS as f64);
    assert_eq!(result.issue_count, 2);
}

#[test]
fn negative_intervals_are_excluded() {
    let catalog = catalog();
    let skewed = Timeline {
        key: "A-5".into(),
        entries: vec![
            TimelineEntry {
                at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                status_id: "1".into(),
            },
            TimelineEntry {
                at: Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap(),
                status_id: "2".into(),
            },
        ],
    };

    // "now" precedes the last entry, so the final interval is negative.
    let result = time_in_status(&[skewed], &catalog, &groups(&catalog), now());
    assert_eq!(result.negative_intervals, 1);
    assert_eq!(result.by_status.len(), 1);
    assert!(result.by_status.iter().all(|s| s.total_ms > 0));
}

#[test]
fn unvisited_statuses_are_absent() {
    let catalog = catalog();
    let issue = Issue::new("A-6", "2024-01-01T00:00:00Z").with_status("1");
    let result = time_in_status(&[timeline(&issue)], &catalog, &groups(&catalog), now());
    assert_eq!(result.by_status.len(), 1);
    assert_eq!(result.by_group[2].total_ms, 0);
}

#[test]
fn empty_input_is_zeroed() {
    let catalog = catalog();
    let result = time_in_status(&[], &catalog, &groups(&catalog), now());
    assert_eq!(result.issue_count, 0);
    assert!(result.by_status.is_empty());
    assert!(result.by_group.iter().all(|g| g.average_ms == 0.0));
}
