// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn schema_is_valid_json() {
    let output = flow().arg("schema").output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "MetricsResult");
    assert!(json["properties"]["cumulative_flow"].is_object());
}

#[test]
fn completions_generate_for_bash() {
    flow()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flow"));
}

#[test]
fn help_lists_commands() {
    flow()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("timeline"));
}
