// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::clock::FixedClock;
use crate::selector::Selector;
use chrono::TimeZone;

struct Fixture {
    issues: Vec<Issue>,
    groups: Vec<StatusGroup>,
    statuses: Vec<Status>,
    flow: FlowConfig,
    range: DateRange,
}

impl Fixture {
    fn new() -> Self {
        let statuses = vec![
            Status::new("1", "New"),
            Status::new("2", "In Progress"),
            Status::new("3", "Review"),
            Status::new("4", "Done"),
        ];
        let groups = vec![
            StatusGroup::new("Triage", ["1"]),
            StatusGroup::new("Active", ["2", "3"]),
            StatusGroup::new("Complete", ["4"]),
        ];
        let issues = vec![
            Issue::new("FLOW-1", "2024-01-01T00:00:00Z")
                .with_status("4")
                .with_transition("2024-01-01T02:00:00Z", "1", "2")
                .with_transition("2024-01-04T02:00:00Z", "2", "4"),
            Issue::new("FLOW-2", "2024-01-02T00:00:00Z")
                .with_status("3")
                .with_transition("2024-01-02T06:00:00Z", "1", "2")
                .with_transition("2024-01-03T00:00:00Z", "2", "3"),
            Issue::new("FLOW-3", "2024-01-03T00:00:00Z").with_status("1"),
            Issue::new("FLOW-4", "not a date").with_status("1"),
        ];
        let flow = FlowConfig {
            triage: Some(Selector::group("Triage")),
            cycle_start: Some(Selector::group("Active")),
            cycle_end: Some(Selector::group("Complete")),
        };
        Fixture {
            issues,
            groups,
            statuses,
            flow,
            range: DateRange::parse("2024-01-01", "2024-01-05").unwrap(),
        }
    }

    fn request(&self) -> MetricsRequest<'_> {
        MetricsRequest {
            issues: &self.issues,
            groups: &self.groups,
            statuses: &self.statuses,
            range: self.range,
            flow: &self.flow,
        }
    }
}

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 6, 0, 0, 0).unwrap())
}

#[test]
fn full_pass() {
    let fixture = Fixture::new();
    let result = process_metrics(&fixture.request(), &clock()).unwrap();

    assert_eq!(result.generated_at, clock().0);
    assert_eq!(
        result.diagnostics,
        Diagnostics {
            issues_received: 4,
            timelines_built: 3,
            issues_skipped: 1,
        }
    );

    // Distribution counts the raw issues, including the one without a timeline.
    assert_eq!(result.distribution.total_issues, 4);
    let by_group: Vec<_> = result
        .distribution
        .by_group
        .iter()
        .map(|g| (g.group.as_str(), g.count))
        .collect();
    assert_eq!(by_group, vec![("Triage", 2), ("Active", 1), ("Complete", 1)]);

    assert_eq!(result.cycle_time.durations, vec![3.0]);
    assert_eq!(result.cycle_time.records[0].key, "FLOW-1");

    assert_eq!(result.throughput.total, 1);
    assert_eq!(result.throughput.days[3].date, "2024-01-04");
    assert_eq!(result.throughput.days[3].count, 1);

    // FLOW-1 acknowledged after 2h, FLOW-2 after 6h.
    assert_eq!(result.support.avg_mtta_hours, 4.0);
    assert_eq!(result.support.avg_mttr_hours, 74.0);

    // WIP = universe minus every boundary: nothing is left.
    assert_eq!(result.summary.wip_count, 0);
    assert!(result.summary.wip_statuses.is_empty());

    assert_eq!(result.cumulative_flow.rows.len(), 5);
    let last = &result.cumulative_flow.rows[4].counts;
    assert_eq!(last["Triage"], 1);
    assert_eq!(last["Active"], 1);
    assert_eq!(last["Complete"], 1);

    assert_eq!(result.status_groups["3"], vec!["Active"]);
    assert_eq!(result.status_names["2"], "In Progress");
}

#[test]
fn time_in_status_covers_lifetime_when_all_grouped() {
    let fixture = Fixture::new();
    let result = process_metrics(&fixture.request(), &clock()).unwrap();

    let grouped: i64 = result.time_in_status.by_group.iter().map(|g| g.total_ms).sum();
    let now = clock().0;
    let lifetimes: i64 = ["2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z", "2024-01-03T00:00:00Z"]
        .iter()
        .map(|c| (now - crate::issue::parse_timestamp(c).unwrap()).num_milliseconds())
        .sum();
    assert_eq!(grouped, lifetimes);
}

#[test]
fn identical_inputs_give_identical_results() {
    let fixture = Fixture::new();
    let first = process_metrics(&fixture.request(), &clock()).unwrap();
    let second = process_metrics(&fixture.request(), &clock()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn no_issues_returns_none() {
    let mut fixture = Fixture::new();
    fixture.issues.clear();
    assert!(process_metrics(&fixture.request(), &clock()).is_none());
}

#[test]
fn no_statuses_returns_none() {
    let mut fixture = Fixture::new();
    fixture.statuses.clear();
    assert!(process_metrics(&fixture.request(), &clock()).is_none());
}

#[test]
fn unknown_group_zeroes_dependent_metrics() {
    let mut fixture = Fixture::new();
    fixture.flow.cycle_end = Some(Selector::group("NoSuchGroup"));

    let result = process_metrics(&fixture.request(), &clock()).unwrap();
    assert_eq!(result.cycle_time, CycleTime::default());
    assert_eq!(result.throughput.total, 0);
    assert_eq!(result.support.avg_mttr_hours, 0.0);
    // MTTA still resolves.
    assert_eq!(result.support.acknowledged, 2);
}

#[test]
fn unset_selectors_still_produce_a_result() {
    let mut fixture = Fixture::new();
    fixture.flow = FlowConfig::default();

    let result = process_metrics(&fixture.request(), &clock()).unwrap();
    assert_eq!(result.cycle_time, CycleTime::default());
    assert_eq!(result.support, SupportMetrics::default());
    // Every status is WIP when no boundary is configured.
    assert_eq!(result.summary.wip_statuses.len(), 4);
    assert_eq!(result.summary.wip_count, 4);
    assert_eq!(result.distribution.total_issues, 4);
}

#[test]
fn build_timelines_reports_skipped() {
    let fixture = Fixture::new();
    let catalog = StatusCatalog::new(&fixture.statuses);
    let (timelines, skipped) = build_timelines(&fixture.issues, &catalog);
    assert_eq!(timelines.len(), 3);
    assert_eq!(skipped, 1);
}
