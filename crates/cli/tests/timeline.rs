// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn timeline_lists_every_issue() {
    let temp = setup();
    flow()
        .args(["timeline", "-i", "issues.json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FLOW-1"))
        .stdout(predicate::str::contains("FLOW-2"))
        .stdout(predicate::str::contains("2024-01-04 00:00  Done (3)"));
}

#[test]
fn timeline_for_one_issue() {
    let temp = setup();
    flow()
        .args(["timeline", "-i", "issues.json", "FLOW-2"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FLOW-1").not())
        .stdout(predicate::str::contains("To Do (1)"));
}

#[test]
fn timeline_json() {
    let temp = setup();
    let output = flow()
        .args(["timeline", "-i", "issues.json", "FLOW-1", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json[0]["entries"].as_array().unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e["status_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn timeline_unknown_issue_fails() {
    let temp = setup();
    flow()
        .args(["timeline", "-i", "issues.json", "FLOW-404"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("issue not found: FLOW-404"));
}
