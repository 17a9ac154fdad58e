// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs the JSON Schema of `flow report -o json`.

use schemars::schema_for;

use crate::error::Result;

/// Run the schema command.
pub fn run() -> Result<()> {
    println!("{}", render()?);
    Ok(())
}

fn render() -> Result<String> {
    let schema = schema_for!(flow_core::MetricsResult);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
