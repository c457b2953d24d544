use kb_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: Uuid,
        location: ErrorLocation,
    },

    #[error("Attachment of {size} bytes exceeds the {max} byte limit {location}")]
    AttachmentTooLarge {
        size: i64,
        max: u64,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}.{column}: {message} {location}")]
    CorruptRow {
        table: &'static str,
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound {
            entity,
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
