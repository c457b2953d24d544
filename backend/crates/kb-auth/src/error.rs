use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Why a request could not be tied to a principal.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No Authorization header {location}")]
    MissingCredentials { location: ErrorLocation },

    #[error("Authorization header is not 'Bearer <token>' {location}")]
    NotBearer { location: ErrorLocation },

    #[error("Token expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Token not valid yet (nbf) {location}")]
    NotYetValid { location: ErrorLocation },

    #[error("Token rejected: {source} {location}")]
    Rejected {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub(crate) fn from_jwt(source: jsonwebtoken::errors::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source.kind() {
            ErrorKind::ExpiredSignature => Self::Expired { location },
            ErrorKind::ImmatureSignature => Self::NotYetValid { location },
            _ => Self::Rejected { source, location },
        }
    }

    /// What the client is told. Signature and claim details stay in the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingCredentials { .. } => "Authentication credentials were not provided.",
            Self::NotBearer { .. } => "Authorization header must use the Bearer scheme.",
            Self::Expired { .. } => "Authentication token has expired.",
            Self::NotYetValid { .. } | Self::Rejected { .. } | Self::InvalidClaim { .. } => {
                "Invalid authentication token."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
