use crate::ApiError;
use crate::api::params::{
    parse_date, parse_date_end, parse_id_list, parse_priority, required_id,
};

use kb_core::TaskPriority;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

#[test]
fn test_required_id_missing_is_bad_request_with_message() {
    for value in [None, Some(""), Some("   ")] {
        match required_id(value, "Task ID is required.") {
            Err(ApiError::BadRequest { message, .. }) => {
                assert_eq!(message, "Task ID is required.")
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }
}

#[test]
fn test_required_id_malformed_is_validation() {
    assert!(matches!(
        required_id(Some("nope"), "Task ID is required."),
        Err(ApiError::Validation { .. })
    ));
}

#[test]
fn test_required_id_trims_whitespace() {
    let id = Uuid::new_v4();
    let parsed = required_id(Some(&format!(" {id} ")), "missing").unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn test_parse_date_accepts_plain_date_as_start_of_day() {
    let parsed = parse_date("start_date", "2024-03-15").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
}

#[test]
fn test_parse_date_end_extends_plain_date_to_end_of_day() {
    let parsed = parse_date_end("end_date", "2024-03-15").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap());
}

#[test]
fn test_parse_date_accepts_rfc3339_with_offset() {
    let parsed = parse_date("due_date", "2024-03-15T10:30:00+02:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap());

    // An explicit time is kept as-is for the upper bound too
    let end = parse_date_end("end_date", "2024-03-15T10:30:00Z").unwrap();
    assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap());
}

#[test]
fn test_parse_date_rejects_garbage_with_field() {
    match parse_date("start_date", "15/03/2024") {
        Err(ApiError::Validation { message, field, .. }) => {
            assert_eq!(message, "Invalid start_date. Use YYYY-MM-DD or RFC 3339.");
            assert_eq!(field.as_deref(), Some("start_date"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_parse_id_list_skips_empty_entries() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let parsed = parse_id_list(&format!("{a}, ,{b},")).unwrap();
    assert_eq!(parsed, vec![a, b]);
    assert!(parse_id_list("").unwrap().is_empty());
}

#[test]
fn test_parse_id_list_rejects_malformed_id() {
    match parse_id_list(&format!("{},bogus", Uuid::new_v4())) {
        Err(ApiError::BadRequest { message, .. }) => assert_eq!(message, "Invalid tag ID: bogus."),
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[test]
fn test_parse_priority() {
    assert_eq!(parse_priority("high").unwrap(), TaskPriority::High);
    assert!(matches!(
        parse_priority("urgent"),
        Err(ApiError::Validation { .. })
    ));
}
