// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flow configuration loading.
//!
//! A flow configuration names the status universe, the status groups, the
//! three flow boundaries and, optionally, the reporting date range. It is
//! read from `flow.toml` or `flow.json`; the extension picks the format.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use flow_core::{DateRange, FlowConfig, Selector, Status, StatusGroup};

use crate::error::{Error, Result};

/// Default configuration file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "flow.toml";

/// Contents of a flow configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// First day of the reporting range (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last day of the reporting range, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triage: Option<Selector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_start: Option<Selector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_end: Option<Selector>,
    /// The project's status universe.
    #[serde(default)]
    pub statuses: Vec<Status>,
    /// Named status groups, in display order.
    #[serde(default)]
    pub groups: Vec<StatusGroup>,
}

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

impl Config {
    /// Loads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::parse(&content, ConfigFormat::from_path(path))
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Parses configuration text in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> std::result::Result<Self, String> {
        match format {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// The flow boundaries configured in this file.
    pub fn flow(&self) -> FlowConfig {
        FlowConfig {
            triage: self.triage.clone(),
            cycle_start: self.cycle_start.clone(),
            cycle_end: self.cycle_end.clone(),
        }
    }

    /// Resolves the reporting range, letting `start`/`end` override the file.
    pub fn date_range(&self, start: Option<&str>, end: Option<&str>) -> Result<DateRange> {
        let start = start
            .or(self.start_date.as_deref())
            .ok_or(Error::MissingField {
                field: "start date",
                flag: "start",
            })?;
        let end = end.or(self.end_date.as_deref()).ok_or(Error::MissingField {
            field: "end date",
            flag: "end",
        })?;
        Ok(DateRange::parse(start, end)?)
    }

    /// Applies command-line selector overrides.
    pub fn with_overrides(
        mut self,
        triage: Option<Selector>,
        cycle_start: Option<Selector>,
        cycle_end: Option<Selector>,
    ) -> Self {
        if triage.is_some() {
            self.triage = triage;
        }
        if cycle_start.is_some() {
            self.cycle_start = cycle_start;
        }
        if cycle_end.is_some() {
            self.cycle_end = cycle_end;
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
