use crate::error::require_contained_path;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Verbosity of the `sqlx::query` target, never louder than `level`
    pub sql_level: LogLevel,
    /// ANSI colors on stdout; ignored when logging to a file
    pub colored: bool,
    /// Log file name under `dir`; stdout when unset
    pub file: Option<String>,
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::APP_DEFAULT,
            sql_level: LogLevel::SQL_DEFAULT,
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        require_contained_path("logging.dir", &self.dir)?;

        if let Some(file) = &self.file
            && (file.is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::invalid(
                "logging.file",
                format!("'{file}' must be a plain file name"),
            ));
        }

        Ok(())
    }
}
