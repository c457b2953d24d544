use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlobError {
    #[error("Blob {key} not found {location}")]
    NotFound {
        key: String,
        location: ErrorLocation,
    },

    #[error("Invalid blob key '{key}' {location}")]
    InvalidKey {
        key: String,
        location: ErrorLocation,
    },

    #[error("Blob I/O failed for {key}: {source} {location}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl BlobError {
    #[track_caller]
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound {
                key: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }
        Self::Io {
            key: key.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BlobError>;

/// Opaque storage for attachment bytes.
///
/// `store` picks the key; callers persist it and hand it back to `load` and
/// `delete`.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String>;

    async fn load(&self, key: &str) -> Result<Vec<u8>>;

    async fn delete(&self, key: &str) -> Result<()>;
}
