//! Column decoding shared by the repositories. Ids are stored as TEXT and
//! timestamps as Unix seconds.

use crate::{DbError, Result as DbErrorResult};

use kb_core::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Visibility predicate over a `kb_projects p` alias. Bind the principal twice.
pub(crate) const MEMBER_PREDICATE: &str = "(p.created_by = ? OR EXISTS (SELECT 1 FROM kb_project_members m WHERE m.project_id = p.id AND m.user_id = ?))";

#[track_caller]
pub(crate) fn parse_uuid(
    value: &str,
    table: &'static str,
    column: &'static str,
) -> DbErrorResult<Uuid> {
    match Uuid::parse_str(value) {
        Ok(id) => Ok(id),
        Err(e) => Err(DbError::CorruptRow {
            table,
            column,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

#[track_caller]
pub(crate) fn parse_optional_uuid(
    value: Option<&str>,
    table: &'static str,
    column: &'static str,
) -> DbErrorResult<Option<Uuid>> {
    match value {
        Some(value) => parse_uuid(value, table, column).map(Some),
        None => Ok(None),
    }
}

#[track_caller]
pub(crate) fn parse_timestamp(
    seconds: i64,
    table: &'static str,
    column: &'static str,
) -> DbErrorResult<DateTime<Utc>> {
    match DateTime::from_timestamp(seconds, 0) {
        Some(ts) => Ok(ts),
        None => Err(DbError::CorruptRow {
            table,
            column,
            message: format!("timestamp {seconds} out of range"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// `?, ?, ?` for an `IN (...)` list of `count` values.
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
