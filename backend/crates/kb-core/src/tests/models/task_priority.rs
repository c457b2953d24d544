use crate::TaskPriority;

use std::str::FromStr;

#[test]
fn test_task_priority_as_str() {
    assert_eq!(TaskPriority::Low.as_str(), "low");
    assert_eq!(TaskPriority::Medium.as_str(), "medium");
    assert_eq!(TaskPriority::High.as_str(), "high");
}

#[test]
fn test_task_priority_from_str() {
    assert_eq!(TaskPriority::from_str("low").unwrap(), TaskPriority::Low);
    assert_eq!(TaskPriority::from_str("high").unwrap(), TaskPriority::High);
    assert!(TaskPriority::from_str("urgent").is_err());
    assert!(TaskPriority::from_str("HIGH").is_err());
}

#[test]
fn test_task_priority_default() {
    assert_eq!(TaskPriority::default(), TaskPriority::Medium);
}

#[test]
fn test_task_priority_invalid_reports_field() {
    let err = TaskPriority::from_str("urgent").unwrap_err();
    assert_eq!(err.field(), Some("priority"));
    assert!(err.message().contains("urgent"));
}
