use crate::ApiError;
use crate::storage::BlobError;

use kb_core::validation::validate_name;
use kb_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Task not found.".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Task not found.");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("Title too long", Some("title"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_each_variant_maps_to_its_status_and_code() {
    let cases = [
        (ApiError::bad_request("x"), StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        (ApiError::unauthorized("x"), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (ApiError::forbidden("x"), StatusCode::FORBIDDEN, "FORBIDDEN"),
        (ApiError::conflict("x"), StatusCode::CONFLICT, "CONFLICT"),
        (ApiError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    ];

    for (error, expected_status, expected_code) in cases {
        let (status, json) = body_json(error).await;
        assert_eq!(status, expected_status);
        assert_eq!(json["error"]["code"], expected_code);
    }
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("Invalid UUID"));
            assert!(field.is_none());
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_validation_error_keeps_field() {
    let core_err = validate_name("name", "Project name", "   ", 100).unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Project name cannot be empty.");
            assert_eq!(field.as_deref(), Some("name"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_db_not_found_names_the_entity() {
    let id = Uuid::new_v4();
    let api_err: ApiError = DbError::not_found("Column", id).into();

    match api_err {
        ApiError::NotFound { message, .. } => {
            assert_eq!(message, format!("Column not found for id {id}."))
        }
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_missing_blob_converts_to_not_found() {
    let blob_err = BlobError::io("abc", std::io::Error::from(std::io::ErrorKind::NotFound));
    let api_err: ApiError = blob_err.into();

    assert_eq!(api_err.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_other_blob_failure_is_internal() {
    let blob_err = BlobError::io(
        "abc",
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    let api_err: ApiError = blob_err.into();

    assert_eq!(api_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
