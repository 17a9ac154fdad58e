// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::Issue;
use crate::status::{Status, StatusCatalog, StatusGroup};
use crate::timeline::build_timeline;
use chrono::TimeZone;

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
            StatusGroup::new("Todo", ["1"]),
            StatusGroup::new("Doing", ["2"]),
            StatusGroup::new("Done", ["3"]),
        ],
        catalog,
    )
}

fn far_future() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
}

fn row(flow: &CumulativeFlow, day: usize) -> Vec<usize> {
    flow.groups
        .iter()
        .map(|g| flow.rows[day].counts[g])
        .collect()
}

#[test]
fn snapshots_status_at_end_of_each_day() {
    let catalog = catalog();
    let index = groups(&catalog);
    let issue = Issue::new("A-1", "2024-01-01T09:00:00Z")
        .with_transition("2024-01-02T10:00:00Z", "1", "2")
        .with_transition("2024-01-03T23:59:59.999Z", "2", "3");
    let timelines = vec![build_timeline(&issue, &catalog).unwrap()];
    let range = DateRange::parse("2023-12-31", "2024-01-03").unwrap();

    let flow = cumulative_flow(&timelines, &index, index.order(), &range, far_future());

    assert_eq!(flow.groups, vec!["Todo", "Doing", "Done"]);
    assert_eq!(flow.rows.len(), 4);
    assert_eq!(row(&flow, 0), vec![0, 0, 0]);
    assert_eq!(row(&flow, 1), vec![1, 0, 0]);
    assert_eq!(row(&flow, 2), vec![0, 1, 0]);
    assert_eq!(row(&flow, 3), vec![0, 0, 1]);
}

#[test]
fn groups_outside_order_are_ignored() {
    let catalog = catalog();
    let index = groups(&catalog);
    let issue = Issue::new("A-1", "2024-01-01T00:00:00Z").with_status("2");
    let timelines = vec![build_timeline(&issue, &catalog).unwrap()];
    let range = DateRange::parse("2024-01-01", "2024-01-01").unwrap();
    let order = vec!["Todo".to_string(), "Done".to_string()];

    let flow = cumulative_flow(&timelines, &index, &order, &range, far_future());
    assert_eq!(flow.rows[0].counts.len(), 2);
    assert!(flow.rows[0].counts.values().all(|&n| n == 0));
}

#[test]
fn today_is_bounded_by_now() {
    let catalog = catalog();
    let index = groups(&catalog);
    let issue = Issue::new("A-1", "2024-01-01T00:00:00Z")
        .with_transition("2024-01-01T18:00:00Z", "1", "2");
    let timelines = vec![build_timeline(&issue, &catalog).unwrap()];
    let range = DateRange::parse("2024-01-01", "2024-01-01").unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

    let flow = cumulative_flow(&timelines, &index, index.order(), &range, now);
    assert_eq!(row(&flow, 0), vec![1, 0, 0]);
}

#[test]
fn serializes_flat_rows() {
    let row = CfdRow {
        date: "2024-01-01".into(),
        counts: BTreeMap::from([("Doing".to_string(), 2), ("Todo".to_string(), 1)]),
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "date": "2024-01-01", "Doing": 2, "Todo": 1 })
    );
}

#[test]
fn long_range_yields_no_rows() {
    let catalog = catalog();
    let index = groups(&catalog);
    let range = DateRange::parse("2000-01-01", "2024-01-01").unwrap();
    let flow = cumulative_flow(&[], &index, index.order(), &range, far_future());
    assert!(flow.rows.is_empty());
}
