use crate::error::require_contained_path;
use crate::{ConfigErrorResult, DEFAULT_BLOB_DIRECTORY};

use serde::Deserialize;

/// Where attachment bytes are kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Blob directory, relative to the config directory
    pub blob_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            blob_dir: String::from(DEFAULT_BLOB_DIRECTORY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        require_contained_path("storage.blob_dir", &self.blob_dir)
    }
}
