//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with the matching HTTP status.

use crate::storage::BlobError;

use kb_auth::AuthError;
use kb_core::CoreError;
use kb_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Field-level validation failure (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Missing or invalid credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found or not visible (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let body = match self {
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
                field: None,
            },
            ApiError::Forbidden { message, .. } => ApiErrorBody {
                code: "FORBIDDEN".into(),
                message,
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::internal("Database operation failed")
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::validation(format!("Invalid UUID format: {}", e), None)
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.message(),
            field: e.field().map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::warn!("Authentication failed: {}", e);
        ApiError::unauthorized(e.public_message())
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<BlobError> for ApiError {
    #[track_caller]
    fn from(e: BlobError) -> Self {
        log::error!("Blob store error: {}", e);
        match e {
            BlobError::NotFound { .. } => ApiError::not_found("Attachment content not found."),
            _ => ApiError::internal("File storage operation failed"),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { entity, id, .. } => {
                ApiError::not_found(format!("{entity} not found for id {id}."))
            }
            DbError::AttachmentTooLarge { .. } => {
                ApiError::validation("File size cannot exceed 100MB.", Some("file"))
            }
            DbError::Sqlx { source, .. } => {
                let unique_violation = source
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation());
                if unique_violation {
                    log::warn!("Unique constraint rejected write: {}", source);
                    return ApiError::conflict("A record with these values already exists.");
                }

                log::error!("Database error: {}", source);
                match source {
                    sqlx::Error::RowNotFound => ApiError::not_found("Resource not found."),
                    _ => ApiError::internal("Database operation failed"),
                }
            }
            DbError::Migration { message, .. } => {
                ApiError::internal(format!("Database migration error: {}", message))
            }
            DbError::Initialization { message, .. } => {
                ApiError::internal(format!("Database initialization error: {}", message))
            }
            DbError::CorruptRow { table, column, .. } => {
                log::error!("Corrupt value in {}.{}", table, column);
                ApiError::internal("Database operation failed")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
