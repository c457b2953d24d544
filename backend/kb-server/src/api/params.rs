//! Parsing helpers for path, query and body values.

use crate::{ApiError, ApiResult};

use kb_core::TaskPriority;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

/// Parse a path id; malformed ids are a validation error.
pub fn parse_id(value: &str) -> ApiResult<Uuid> {
    Ok(Uuid::parse_str(value)?)
}

/// A required id from a body or query. Absent or blank yields `BadRequest`
/// with `missing`.
pub fn required_id(value: Option<&str>, missing: &str) -> ApiResult<Uuid> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => parse_id(raw),
        None => Err(ApiError::bad_request(missing)),
    }
}

pub fn parse_priority(value: &str) -> ApiResult<TaskPriority> {
    Ok(value.parse::<TaskPriority>()?)
}

/// `YYYY-MM-DD` (start of day, UTC) or RFC 3339.
pub fn parse_date(field: &str, value: &str) -> ApiResult<DateTime<Utc>> {
    parse_date_with(field, value, NaiveTime::MIN)
}

/// Like [`parse_date`], but a bare date means the end of that day so the
/// bound stays inclusive.
pub fn parse_date_end(field: &str, value: &str) -> ApiResult<DateTime<Utc>> {
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
    parse_date_with(field, value, end_of_day)
}

fn parse_date_with(field: &str, value: &str, time: NaiveTime) -> ApiResult<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(time).and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            ApiError::validation(
                format!("Invalid {field}. Use YYYY-MM-DD or RFC 3339."),
                Some(field),
            )
        })
}

/// Comma-separated ids, e.g. `a,b,c`. Empty entries are skipped.
pub fn parse_id_list(value: &str) -> ApiResult<Vec<Uuid>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            Uuid::parse_str(part)
                .map_err(|_| ApiError::bad_request(format!("Invalid tag ID: {part}.")))
        })
        .collect()
}
