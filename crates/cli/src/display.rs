// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of reports and timelines.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use flow_core::{MetricsResult, Timeline};

const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Width of the label column in tabular sections.
const LABEL_WIDTH: usize = 24;

/// Labels a status as `Name (id)`, or the bare id when it has no name.
pub fn status_label(id: &str, names: &BTreeMap<String, String>) -> String {
    match names.get(id) {
        Some(name) if name != id => format!("{} ({})", name, id),
        _ => id.to_string(),
    }
}

/// Formats a millisecond duration using its two most significant units.
///
/// - `>= 1 day` → `"3d 4h"`
/// - `>= 1 hour` → `"5h 12m"`
/// - otherwise → `"45m"`
pub fn format_duration_ms(ms: f64) -> String {
    if !ms.is_finite() || ms <= 0.0 {
        return "0m".to_string();
    }
    let days = (ms / MS_PER_DAY).floor();
    let hours = ((ms - days * MS_PER_DAY) / MS_PER_HOUR).floor();
    let minutes = ((ms - days * MS_PER_DAY - hours * MS_PER_HOUR) / MS_PER_MINUTE).floor();
    if days >= 1.0 {
        format!("{}d {}h", days, hours)
    } else if hours >= 1.0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

fn format_instant(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn section(lines: &mut Vec<String>, title: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(title.to_string());
}

/// Renders a full metrics report.
pub fn format_report(result: &MetricsResult) -> String {
    let names = &result.status_names;
    let mut lines = Vec::new();

    lines.push(format!(
        "Flow report {} (generated {} UTC)",
        result.range,
        format_instant(result.generated_at)
    ));
    if result.diagnostics.issues_skipped > 0 {
        lines.push(format!(
            "  {} of {} issues skipped (no usable creation date or status)",
            result.diagnostics.issues_skipped, result.diagnostics.issues_received
        ));
    }

    let summary = &result.summary;
    section(&mut lines, "Summary");
    lines.push(format!("  Issues:       {}", summary.total_issues));
    lines.push(format!("  Completed:    {}", summary.completed));
    let wip: Vec<String> = summary
        .wip_statuses
        .iter()
        .map(|id| status_label(id, names))
        .collect();
    if wip.is_empty() {
        lines.push(format!("  WIP:          {}", summary.wip_count));
    } else {
        lines.push(format!(
            "  WIP:          {} in {}",
            summary.wip_count,
            wip.join(", ")
        ));
    }
    lines.push(format!(
        "  Cycle time:   avg {:.1}d  p50 {:.1}d  p85 {:.1}d",
        summary.average_cycle_days, summary.median_cycle_days, summary.p85_cycle_days
    ));
    lines.push(format!("  MTTA:         {:.1}h", summary.avg_mtta_hours));
    lines.push(format!("  MTTR:         {:.1}h", summary.avg_mttr_hours));

    section(&mut lines, "Status distribution");
    for share in &result.distribution.by_status {
        lines.push(format!(
            "  {:<width$} {:>5} {:>6.1}%",
            status_label(&share.status_id, names),
            share.count,
            share.percentage,
            width = LABEL_WIDTH
        ));
    }
    if !result.distribution.by_group.is_empty() {
        section(&mut lines, "Group distribution");
        for share in &result.distribution.by_group {
            lines.push(format!(
                "  {:<width$} {:>5} {:>6.1}%",
                share.group,
                share.count,
                share.percentage,
                width = LABEL_WIDTH
            ));
        }
    }

    section(&mut lines, "Time in status");
    for time in &result.time_in_status.by_status {
        lines.push(format!(
            "  {:<width$} total {:<10} avg {}",
            status_label(&time.status_id, names),
            format_duration_ms(time.total_ms as f64),
            format_duration_ms(time.average_ms),
            width = LABEL_WIDTH
        ));
    }
    for time in &result.time_in_status.by_group {
        lines.push(format!(
            "  {:<width$} total {:<10} avg {}",
            format!("[{}]", time.group),
            format_duration_ms(time.total_ms as f64),
            format_duration_ms(time.average_ms),
            width = LABEL_WIDTH
        ));
    }

    if !result.cycle_time.histogram.is_empty() {
        section(&mut lines, "Cycle time");
        for bucket in &result.cycle_time.histogram {
            lines.push(format!(
                "  {:<width$} {:>5}",
                bucket.label,
                bucket.count,
                width = LABEL_WIDTH
            ));
        }
    }

    section(&mut lines, "Throughput");
    lines.push(format!("  Total:        {}", result.throughput.total));
    for day in result.throughput.days.iter().filter(|d| d.count > 0) {
        lines.push(format!("  {}   {}", day.date, day.count));
    }

    let cfd = &result.cumulative_flow;
    if !cfd.groups.is_empty() && !cfd.rows.is_empty() {
        section(&mut lines, "Cumulative flow");
        let header: Vec<String> = cfd.groups.iter().map(|g| format!("{:>10}", g)).collect();
        lines.push(format!("  {:<10} {}", "date", header.join(" ")));
        for row in &cfd.rows {
            let counts: Vec<String> = cfd
                .groups
                .iter()
                .map(|g| format!("{:>10}", row.counts.get(g).copied().unwrap_or(0)))
                .collect();
            lines.push(format!("  {:<10} {}", row.date, counts.join(" ")));
        }
    }

    lines.join("\n")
}

/// Renders one timeline: the issue key, then each status with the time it
/// was entered and how long it lasted (open-ended entries run to `now`).
pub fn format_timeline(
    timeline: &Timeline,
    names: &BTreeMap<String, String>,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut lines = vec![timeline.key.clone()];
    for (i, entry) in timeline.entries.iter().enumerate() {
        let until = timeline.entries.get(i + 1).map(|next| next.at).unwrap_or(now);
        let ms = (until - entry.at).num_milliseconds() as f64;
        lines.push(format!(
            "  {}  {:<width$} {}",
            format_instant(entry.at),
            status_label(&entry.status_id, names),
            format_duration_ms(ms),
            width = LABEL_WIDTH
        ));
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
