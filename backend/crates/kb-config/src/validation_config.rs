use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_TAG_NAME_LENGTH: usize = 1;
pub const MAX_TAG_NAME_LENGTH: usize = 100;
pub const DEFAULT_MAX_TAG_NAME_LENGTH: usize = 50;

pub const MIN_COMMENT_LENGTH: usize = 1;
pub const MAX_COMMENT_LENGTH: usize = 100000;
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 10000;

/// Field limits applied to incoming request bodies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Project, board and column names
    pub max_name_length: usize,
    /// Task and subtask titles
    pub max_title_length: usize,
    pub max_tag_name_length: usize,
    pub max_comment_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_tag_name_length: DEFAULT_MAX_TAG_NAME_LENGTH,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "max_name_length",
            self.max_name_length,
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )?;
        Self::check_range(
            "max_title_length",
            self.max_title_length,
            MIN_TITLE_LENGTH,
            MAX_TITLE_LENGTH,
        )?;
        Self::check_range(
            "max_tag_name_length",
            self.max_tag_name_length,
            MIN_TAG_NAME_LENGTH,
            MAX_TAG_NAME_LENGTH,
        )?;
        Self::check_range(
            "max_comment_length",
            self.max_comment_length,
            MIN_COMMENT_LENGTH,
            MAX_COMMENT_LENGTH,
        )?;

        Ok(())
    }

    fn check_range(field: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::invalid(
                format!("validation.{field}"),
                format!("must be {min}-{max}, got {value}"),
            ));
        }
        Ok(())
    }
}
