//! Field-level validation shared by every write path.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Largest accepted attachment, in bytes (100 MB).
pub const MAX_ATTACHMENT_BYTES: u64 = 100 * 1024 * 1024;

/// Longest accepted color string.
pub const MAX_COLOR_LENGTH: usize = 20;

#[track_caller]
fn invalid(field: &str, message: impl Into<String>) -> CoreError {
    CoreError::Validation {
        message: message.into(),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Trimmed, non-blank, at most `max_len` characters. Returns the trimmed value.
#[track_caller]
pub fn validate_name(field: &str, label: &str, value: &str, max_len: usize) -> CoreErrorResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, format!("{label} cannot be empty.")));
    }
    if trimmed.chars().count() > max_len {
        return Err(invalid(
            field,
            format!("{label} cannot exceed {max_len} characters."),
        ));
    }
    Ok(trimmed.to_string())
}

#[track_caller]
pub fn validate_wip_limit(wip_limit: Option<i64>) -> CoreErrorResult<()> {
    match wip_limit {
        Some(limit) if limit < 1 => Err(invalid("wip_limit", "WIP limit must be a positive integer.")),
        _ => Ok(()),
    }
}

#[track_caller]
pub fn validate_color(field: &str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "Color cannot be empty."));
    }
    if value.chars().count() > MAX_COLOR_LENGTH {
        return Err(invalid(
            field,
            format!("Color cannot exceed {MAX_COLOR_LENGTH} characters."),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_content(value: &str, max_len: usize) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(invalid("content", "Comment content cannot be empty."));
    }
    if value.chars().count() > max_len {
        return Err(invalid(
            "content",
            format!("Comment content cannot exceed {max_len} characters."),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_attachment_size(size_bytes: u64) -> CoreErrorResult<()> {
    if size_bytes > MAX_ATTACHMENT_BYTES {
        return Err(invalid("file", "File size cannot exceed 100MB."));
    }
    Ok(())
}
