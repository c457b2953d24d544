use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid task priority: {value} {location}")]
    InvalidTaskPriority {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field name attached to a validation failure, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidTaskPriority { .. } => Some("priority"),
        }
    }

    /// Message without the location suffix, safe to hand back to clients.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidTaskPriority { value, .. } => {
                format!("'{value}' is not a valid priority. Use low, medium or high.")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
