use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims accepted by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's UUID
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Display name; the subject is used when absent
    #[serde(default)]
    pub name: Option<String>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.user_id()?;

        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(AuthError::InvalidClaim {
                claim: "name".to_string(),
                message: "name cannot be blank".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        match Uuid::parse_str(&self.sub) {
            Ok(id) => Ok(id),
            Err(e) => Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: format!("sub must be a UUID: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    pub fn username(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.sub.clone())
    }
}
