// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn flow() -> Command {
    cargo_bin_cmd!("flow")
}

pub const NOW: &str = "2024-01-10T00:00:00Z";

pub const CONFIG_TOML: &str = r#"
start_date = "2024-01-01"
end_date = "2024-01-05"
triage = { type = "group", value = "Backlog" }
cycle_start = { type = "group", value = "Active" }
cycle_end = { type = "group", value = "Done" }

statuses = [
  { id = "1", name = "To Do" },
  { id = "2", name = "In Progress" },
  { id = "3", name = "Done" },
]

groups = [
  { name = "Backlog", statuses = ["1"] },
  { name = "Active", statuses = ["2"] },
  { name = "Done", statuses = ["3"] },
]
"#;

/// Two issues: FLOW-1 walks To Do -> In Progress -> Done over three days,
/// FLOW-2 never leaves To Do.
pub const ISSUES_JSON: &str = r#"{
  "issues": [
    {
      "key": "FLOW-1",
      "fields": {"created": "2024-01-01T00:00:00.000+0000", "status": {"id": "3", "name": "Done"}},
      "changelog": {"histories": [
        {"created": "2024-01-02T00:00:00.000+0000", "items": [{"field": "status", "from": "1", "to": "2"}]},
        {"created": "2024-01-04T00:00:00.000+0000", "items": [{"field": "status", "from": "2", "to": "3"}]}
      ]}
    },
    {
      "key": "FLOW-2",
      "fields": {"created": "2024-01-01T00:00:00.000+0000", "status": {"id": 1}}
    }
  ]
}"#;

pub fn write(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Temp directory holding `flow.toml` and `issues.json`.
pub fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(&temp, "flow.toml", CONFIG_TOML);
    write(&temp, "issues.json", ISSUES_JSON);
    temp
}
