use crate::error::require_contained_path;
use crate::{ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use serde::Deserialize;

/// SQLite settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        require_contained_path("database.path", &self.path)
    }
}
