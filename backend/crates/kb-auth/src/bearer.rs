use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Extract the token from an `Authorization: Bearer <token>` header value.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let Some(header) = header else {
        return Err(AuthError::MissingCredentials {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::NotBearer {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
