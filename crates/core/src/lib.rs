// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! flow-core: Flow metrics engine for issue-tracker data
//!
//! This crate turns issue records and their status-change audit logs into
//! flow metrics: status distribution, time in status, cycle time,
//! throughput, cumulative flow, and support SLAs (MTTA/MTTR).
//!
//! Every entry point is a pure function of its inputs. The only source of
//! non-determinism, the "now" that closes open intervals, is read through a
//! [`ClockSource`].

pub mod aggregate;
pub mod calendar;
pub mod clock;
pub mod engine;
pub mod error;
pub mod issue;
pub mod selector;
pub mod status;
pub mod timeline;

pub use calendar::DateRange;
pub use clock::{ClockSource, FixedClock, SystemClock};
pub use engine::{build_timelines, process_metrics, Diagnostics, MetricsRequest, MetricsResult};
pub use error::{Error, Result};
pub use issue::{parse_issues, parse_timestamp, ChangeItem, Changelog, History, Issue, IssueFields, StatusRef};
pub use selector::{resolve_selector, FlowConfig, Selector, SelectorKind};
pub use status::{GroupIndex, Status, StatusCatalog, StatusGroup};
pub use timeline::{build_timeline, Timeline, TimelineEntry};
