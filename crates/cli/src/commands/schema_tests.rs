// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn schema_names_every_section() {
    let json: serde_json::Value = serde_json::from_str(&render().unwrap()).unwrap();
    let properties = json["properties"].as_object().unwrap();
    for section in [
        "distribution",
        "time_in_status",
        "cycle_time",
        "throughput",
        "cumulative_flow",
        "support",
        "summary",
    ] {
        assert!(properties.contains_key(section), "missing {section}");
    }
}
