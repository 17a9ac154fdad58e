// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use clap::CommandFactory;
use flow_core::SelectorKind;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn parse_report_with_overrides() {
    let cli = Cli::try_parse_from([
        "flow",
        "report",
        "-i",
        "issues.json",
        "--start",
        "2024-01-01",
        "--cycle-end",
        "status:4",
        "-o",
        "json",
    ])
    .unwrap();

    let Command::Report {
        input,
        range,
        selectors,
        output,
        now,
    } = cli.command
    else {
        panic!("expected report command");
    };
    assert_eq!(input.issues.to_str(), Some("issues.json"));
    assert_eq!(input.config.to_str(), Some("flow.toml"));
    assert_eq!(range.start.as_deref(), Some("2024-01-01"));
    assert!(range.end.is_none());
    assert_eq!(selectors.cycle_end.unwrap().kind, SelectorKind::Status);
    assert_eq!(output, OutputFormat::Json);
    assert!(now.is_none());
}

#[test]
fn report_requires_issues() {
    assert!(Cli::try_parse_from(["flow", "report"]).is_err());
}

#[test]
fn bad_selector_is_rejected() {
    let result = Cli::try_parse_from(["flow", "report", "-i", "x.json", "--triage", "Backlog"]);
    assert!(result.is_err());
}

#[test]
fn parse_timeline_with_key() {
    let cli = Cli::try_parse_from(["flow", "timeline", "-i", "x.json", "FLOW-1"]).unwrap();
    let Command::Timeline { key, .. } = cli.command else {
        panic!("expected timeline command");
    };
    assert_eq!(key.as_deref(), Some("FLOW-1"));
}
