use crate::storage::BlobError;

use thiserror::Error;

/// Startup failures. Request-time failures use [`crate::ApiError`].
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] kb_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] kb_db::DbError),

    #[error("Blob store error: {0}")]
    Storage(#[from] BlobError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("auth.jwt_secret is required when auth is enabled")]
    MissingJwtSecret,
}

pub type Result<T> = std::result::Result<T, ServerError>;
