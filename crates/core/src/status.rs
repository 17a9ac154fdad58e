// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Statuses, status groups, and the per-call lookup tables built from them.
//!
//! [`StatusCatalog`] and [`GroupIndex`] are constructed fresh for every
//! metrics pass and dropped with it. Nothing here is cached between calls.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::issue::{status_id, status_ids};

/// An atomic workflow state in the tracker's project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Status {
    /// Opaque identifier, always compared in string form.
    #[serde(deserialize_with = "status_id")]
    pub id: String,
    /// Display name (e.g. "In Review").
    pub name: String,
}

impl Status {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Status {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A user-named bucket of statuses.
///
/// Membership is not exclusive: a status listed in two groups is counted in
/// both rollups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StatusGroup {
    pub name: String,
    #[serde(default, deserialize_with = "status_ids")]
    pub statuses: Vec<String>,
}

impl StatusGroup {
    pub fn new<I, S>(name: impl Into<String>, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StatusGroup {
            name: name.into(),
            statuses: statuses.into_iter().map(Into::into).collect(),
        }
    }
}

/// The status universe for one metrics pass: id to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCatalog {
    names: BTreeMap<String, String>,
}

impl StatusCatalog {
    /// Builds the catalog, skipping statuses with an empty id.
    pub fn new(statuses: &[Status]) -> Self {
        let names = statuses
            .iter()
            .filter(|s| !s.id.trim().is_empty())
            .map(|s| (s.id.trim().to_string(), s.name.clone()))
            .collect();
        StatusCatalog { names }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    /// Returns the display name of a status, if it is in the universe.
    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Iterates status ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the id → name table for callers rendering drill-downs.
    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }
}

/// Maps each status id to every group it belongs to, preserving the
/// configured group order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupIndex {
    order: Vec<String>,
    members: BTreeMap<String, BTreeSet<String>>,
    by_status: BTreeMap<String, Vec<String>>,
}

impl GroupIndex {
    /// Builds the index. Member ids not in `catalog` are ignored; a repeated
    /// group name keeps its first position and merges members.
    pub fn new(groups: &[StatusGroup], catalog: &StatusCatalog) -> Self {
        let mut index = GroupIndex::default();

        for group in groups {
            if group.name.is_empty() {
                continue;
            }
            if !index.members.contains_key(&group.name) {
                index.order.push(group.name.clone());
            }
            let members = index.members.entry(group.name.clone()).or_default();
            for id in &group.statuses {
                let id = id.trim();
                if !catalog.contains(id) {
                    tracing::warn!(group = %group.name, status = id, "group member not in status list, ignoring");
                    continue;
                }
                if members.insert(id.to_string()) {
                    index
                        .by_status
                        .entry(id.to_string())
                        .or_default()
                        .push(group.name.clone());
                }
            }
        }

        index
    }

    /// Group names in configuration order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Member status ids of a group, or `None` if no such group exists.
    pub fn members(&self, group: &str) -> Option<&BTreeSet<String>> {
        self.members.get(group)
    }

    /// Names of every group containing `status_id`.
    pub fn groups_of(&self, status_id: &str) -> &[String] {
        self.by_status
            .get(status_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_grouped(&self, status_id: &str) -> bool {
        self.by_status.contains_key(status_id)
    }

    /// Returns the status id → group names table.
    pub fn by_status(&self) -> &BTreeMap<String, Vec<String>> {
        &self.by_status
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
