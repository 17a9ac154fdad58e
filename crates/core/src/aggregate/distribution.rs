// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Current-state census of issues by status and by group.

use serde::Serialize;
use std::collections::BTreeMap;

use super::share;
use crate::issue::Issue;
use crate::status::{GroupIndex, StatusCatalog};

/// Issues currently in one status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct StatusShare {
    pub status_id: String,
    pub name: String,
    pub count: usize,
    /// Percentage of all issues.
    pub percentage: f64,
}

/// Issues currently in any status of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct GroupShare {
    pub group: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Distribution {
    pub total_issues: usize,
    pub by_status: Vec<StatusShare>,
    pub by_group: Vec<GroupShare>,
}

/// Tallies issues by their current status.
///
/// Statuses appear in `by_status` when at least one issue is in them or they
/// belong to a group. Group counts are sums of member status counts.
pub fn distribution(issues: &[Issue], catalog: &StatusCatalog, groups: &GroupIndex) -> Distribution {
    let total = issues.len();
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for issue in issues {
        match issue.current_status_id() {
            Some(id) if catalog.contains(id) => *counts.entry(id).or_default() += 1,
            Some(id) => {
                tracing::warn!(key = %issue.key, status = id, "current status not in status list")
            }
            None => tracing::warn!(key = %issue.key, "issue has no current status"),
        }
    }

    let by_status = catalog
        .ids()
        .filter_map(|id| {
            let count = counts.get(id).copied().unwrap_or(0);
            if count == 0 && !groups.is_grouped(id) {
                return None;
            }
            Some(StatusShare {
                status_id: id.to_string(),
                name: catalog.name(id).unwrap_or(id).to_string(),
                count,
                percentage: share(count, total),
            })
        })
        .collect();

    let by_group = groups
        .order()
        .iter()
        .map(|group| {
            let count = groups
                .members(group)
                .map(|members| {
                    members
                        .iter()
                        .map(|id| counts.get(id.as_str()).copied().unwrap_or(0))
                        .sum()
                })
                .unwrap_or(0);
            GroupShare {
                group: group.clone(),
                count,
                percentage: share(count, total),
            }
        })
        .collect();

    Distribution {
        total_issues: total,
        by_status,
        by_group,
    }
}

#[cfg(test)]
#[path = "distribution_tests.rs"]
mod tests;
