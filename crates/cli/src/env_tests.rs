// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::FLOW_TIMINGS, "FLOW_TIMINGS");
    assert_eq!(vars::RUST_LOG, "RUST_LOG");
}

#[test]
fn test_flow_timings_toggle() {
    std::env::remove_var("FLOW_TIMINGS");
    assert!(!flow_timings());
    std::env::set_var("FLOW_TIMINGS", "1");
    assert!(flow_timings());
    std::env::remove_var("FLOW_TIMINGS");
}
