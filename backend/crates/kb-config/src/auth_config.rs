use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_USER_ID, DEFAULT_USERNAME,
    DEFAULT_JWT_LEEWAY_SECS, MAX_JWT_LEEWAY_SECS, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Require `Authorization: Bearer <JWT>` on every API request
    pub enabled: bool,
    /// HS256 secret; required when enabled
    pub jwt_secret: Option<String>,
    /// Clock skew tolerated on token `exp`/`nbf`
    pub jwt_leeway_secs: u64,
    /// Identity used when auth is disabled and no `X-User-Id` is sent
    pub default_user_id: String,
    pub default_username: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_leeway_secs: DEFAULT_JWT_LEEWAY_SECS,
            default_user_id: String::from(DEFAULT_USER_ID),
            default_username: String::from(DEFAULT_USERNAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.enabled {
            match &self.jwt_secret {
                None => {
                    return Err(ConfigError::invalid(
                        "auth.jwt_secret",
                        "required when auth is enabled",
                    ));
                }
                Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                    return Err(ConfigError::invalid(
                        "auth.jwt_secret",
                        format!("must be at least {MIN_JWT_SECRET_LENGTH} characters"),
                    ));
                }
                Some(_) => {}
            }
        }

        if self.jwt_leeway_secs > MAX_JWT_LEEWAY_SECS {
            return Err(ConfigError::invalid(
                "auth.jwt_leeway_secs",
                format!("must be at most {MAX_JWT_LEEWAY_SECS}, got {}", self.jwt_leeway_secs),
            ));
        }

        self.default_user_uuid()?;

        if self.default_username.trim().is_empty() {
            return Err(ConfigError::invalid(
                "auth.default_username",
                "cannot be empty",
            ));
        }

        Ok(())
    }

    pub fn default_user_uuid(&self) -> ConfigErrorResult<Uuid> {
        Uuid::parse_str(&self.default_user_id).map_err(|e| {
            ConfigError::invalid("auth.default_user_id", format!("must be a UUID: {e}"))
        })
    }
}
