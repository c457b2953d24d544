use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Reasons the server cannot be configured. Every failure names the setting
/// (`server.port`, `auth.jwt_secret`, ...) so the operator knows what to fix.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid {key}: {message} {location}")]
    Invalid {
        key: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot determine the working directory: {source}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The offending setting, when there is one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Invalid { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = Result<T, ConfigError>;

/// Paths in the config are resolved against the config directory and must
/// stay inside it.
#[track_caller]
pub(crate) fn require_contained_path(key: &str, value: &str) -> ConfigErrorResult<()> {
    let escapes = value.is_empty()
        || std::path::Path::new(value).is_absolute()
        || value.contains("..");
    if escapes {
        return Err(ConfigError::invalid(
            key,
            format!("'{value}' must be a relative path without '..'"),
        ));
    }
    Ok(())
}
