pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod provider;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::{DEFAULT_LEEWAY_SECS, JwtValidator};
pub use provider::{AuthProvider, Principal};

#[cfg(test)]
mod tests;
