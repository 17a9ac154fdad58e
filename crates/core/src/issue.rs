// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue records as delivered by the issue tracker.
//!
//! These types mirror the tracker's export shape: an issue with a creation
//! timestamp, a current status, and a changelog of field-level histories.
//! Timestamps are kept as the raw strings the tracker sent; the timeline
//! builder parses them so a single bad date only drops what it touches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Changelog field name that carries workflow status transitions.
pub const STATUS_FIELD: &str = "status";

/// Timestamp layout used by trackers that emit offsets without a colon.
const COMPACT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// A tracked work item with its status history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Issue {
    /// Human-facing identifier (e.g. `PROJ-42`).
    pub key: String,
    /// Current field values.
    #[serde(default)]
    pub fields: IssueFields,
    /// Field change history. Absent means no transitions were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<Changelog>,
}

/// Current-state fields of an issue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssueFields {
    /// When the issue was created, as sent by the tracker.
    #[serde(default, deserialize_with = "timestamp_text", skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Status the issue currently occupies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusRef>,
}

/// Reference to a status by id, with its display name when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRef {
    #[serde(deserialize_with = "status_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The audit log of an issue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Changelog {
    #[serde(default)]
    pub histories: Vec<History>,
}

/// One audit log entry: a batch of field changes made at the same instant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct History {
    #[serde(default, deserialize_with = "timestamp_text", skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default)]
    pub items: Vec<ChangeItem>,
}

/// A single field change inside a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeItem {
    /// Name of the changed field.
    #[serde(default)]
    pub field: String,
    /// Previous value (a status id for status changes).
    #[serde(default, deserialize_with = "opt_status_id", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// New value (a status id for status changes).
    #[serde(default, deserialize_with = "opt_status_id", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl Issue {
    /// Creates an issue with a creation timestamp and no history.
    pub fn new(key: impl Into<String>, created: impl Into<String>) -> Self {
        Issue {
            key: key.into(),
            fields: IssueFields {
                created: Some(created.into()),
                status: None,
            },
            changelog: None,
        }
    }

    /// Sets the current status (builder pattern).
    pub fn with_status(mut self, id: impl Into<String>) -> Self {
        self.fields.status = Some(StatusRef {
            id: id.into(),
            name: None,
        });
        self
    }

    /// Appends a status-change history entry (builder pattern).
    pub fn with_transition(
        mut self,
        at: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let history = History {
            created: Some(at.into()),
            items: vec![ChangeItem {
                field: STATUS_FIELD.to_string(),
                from: Some(from.into()),
                to: Some(to.into()),
            }],
        };
        self.changelog
            .get_or_insert_with(Changelog::default)
            .histories
            .push(history);
        self
    }

    /// Returns the id of the status the issue currently occupies.
    pub fn current_status_id(&self) -> Option<&str> {
        self.fields
            .status
            .as_ref()
            .map(|s| s.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Returns all history entries, empty when no changelog was supplied.
    pub fn histories(&self) -> &[History] {
        self.changelog
            .as_ref()
            .map(|c| c.histories.as_slice())
            .unwrap_or(&[])
    }
}

impl ChangeItem {
    /// Returns true if this item records a workflow status change.
    pub fn is_status_change(&self) -> bool {
        self.field.eq_ignore_ascii_case(STATUS_FIELD)
    }
}

/// Parses a tracker timestamp.
///
/// Accepts RFC 3339 and the compact offset form `2024-01-15T10:00:00.000+0000`.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, COMPACT_OFFSET_FORMAT))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::InvalidTimestamp(s.to_string()))
}

/// Parses an issue export.
///
/// Accepts either a bare JSON array of issues or a search-response envelope
/// with an `issues` array. Elements that do not have the shape of an issue
/// are skipped with a warning; only a malformed document is an error.
pub fn parse_issues(json: &str) -> Result<Vec<Issue>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Export {
        List(Vec<Value>),
        Envelope { issues: Vec<Value> },
    }

    let (Export::List(raw) | Export::Envelope { issues: raw }) = serde_json::from_str(json)?;
    let total = raw.len();
    let issues: Vec<Issue> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Issue>(value) {
            Ok(issue) => Some(issue),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed issue");
                None
            }
        })
        .collect();
    if issues.len() < total {
        tracing::warn!(skipped = total - issues.len(), total, "issues dropped while parsing export");
    }
    Ok(issues)
}

/// Deserializes a timestamp as its raw text. Values that are not strings
/// become `None`, leaving the timeline builder to skip what they touch.
fn timestamp_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => {
            tracing::warn!(value = %other, "ignoring non-string timestamp");
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Status ids arrive as strings or numbers depending on the tracker.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> String {
        match raw {
            RawId::Text(s) => s.trim().to_string(),
            RawId::Unsigned(n) => n.to_string(),
            RawId::Signed(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        }
    }
}

/// Deserializes a status id, coercing numbers to their string form.
pub(crate) fn status_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Deserializes an optional status id; empty strings become `None`.
pub(crate) fn opt_status_id<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(String::from).filter(|s| !s.is_empty()))
}

/// Deserializes a required status id where `null` means "not set" and
/// yields an empty string.
pub(crate) fn status_id_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    opt_status_id(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes a list of status ids, coercing each element.
pub(crate) fn status_ids<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawId>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(String::from).collect())
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
