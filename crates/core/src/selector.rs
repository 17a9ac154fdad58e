// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flow boundary selectors and their resolution to status sets.
//!
//! A selector names either a status group or a single status. Resolution
//! never fails: anything that cannot be resolved yields an empty set, and
//! aggregators treat an empty set as "cannot be computed".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::status::{GroupIndex, StatusCatalog};

/// What a selector's value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    /// A named status group.
    Group,
    /// A single status id.
    Status,
}

impl SelectorKind {
    /// Returns the string representation used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorKind::Group => "group",
            SelectorKind::Status => "status",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SelectorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "group" => Ok(SelectorKind::Group),
            "status" => Ok(SelectorKind::Status),
            _ => Err(Error::InvalidSelectorKind(s.to_string())),
        }
    }
}

/// Chooses a group or a single status as a flow boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Selector {
    #[serde(rename = "type")]
    pub kind: SelectorKind,
    /// Group name or status id. Empty means "not configured yet".
    #[serde(default, deserialize_with = "crate::issue::status_id_or_empty")]
    pub value: String,
}

impl Selector {
    pub fn group(name: impl Into<String>) -> Self {
        Selector {
            kind: SelectorKind::Group,
            value: name.into(),
        }
    }

    pub fn status(id: impl Into<String>) -> Self {
        Selector {
            kind: SelectorKind::Status,
            value: id.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

impl FromStr for Selector {
    type Err = Error;

    /// Parses `group:<name>` or `status:<id>`.
    fn from_str(s: &str) -> Result<Self> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidInput(format!("expected 'group:<name>' or 'status:<id>', got '{s}'")))?;
        Ok(Selector {
            kind: kind.trim().parse()?,
            value: value.trim().to_string(),
        })
    }
}

/// The three configurable flow boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FlowConfig {
    /// Triage / acknowledgement boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triage: Option<Selector>,
    /// Where cycle time starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_start: Option<Selector>,
    /// Where cycle time ends; also the resolution boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_end: Option<Selector>,
}

/// Resolves a selector to the concrete status ids it denotes.
///
/// An unset selector or one with an empty value resolves silently to an
/// empty set. A selector naming an unknown group or status resolves to an
/// empty set with a warning.
pub fn resolve_selector(
    selector: Option<&Selector>,
    groups: &GroupIndex,
    catalog: &StatusCatalog,
) -> BTreeSet<String> {
    let Some(selector) = selector.filter(|s| s.is_configured()) else {
        return BTreeSet::new();
    };
    let value = selector.value.trim();

    match selector.kind {
        SelectorKind::Status => {
            if catalog.contains(value) {
                BTreeSet::from([value.to_string()])
            } else {
                tracing::warn!(status = value, "selector status not in status list");
                BTreeSet::new()
            }
        }
        SelectorKind::Group => match groups.members(value) {
            Some(members) => members
                .iter()
                .filter(|id| catalog.contains(id))
                .cloned()
                .collect(),
            None => {
                tracing::warn!(group = value, "selector group not found");
                BTreeSet::new()
            }
        },
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
