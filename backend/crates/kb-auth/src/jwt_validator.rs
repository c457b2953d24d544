use crate::{AuthError, AuthProvider, Claims, Principal, Result as AuthErrorResult};

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Clock skew tolerated on `exp` and `nbf` unless configured otherwise.
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Verifies HS256 tokens minted by whatever service owns user accounts.
/// The server only needs the shared secret; it never issues tokens.
pub struct JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::with_hs256_leeway(secret, DEFAULT_LEEWAY_SECS)
    }

    pub fn with_hs256_leeway(secret: &[u8], leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_nbf = true;
        validation.leeway = leeway_secs;

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Check signature and time window, then the claims themselves.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let claims = match decode::<Claims>(token, &self.key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => return Err(AuthError::from_jwt(e)),
        };
        claims.validate()?;
        Ok(claims)
    }
}

impl AuthProvider for JwtValidator {
    fn verify(&self, credential: &str) -> AuthErrorResult<Principal> {
        let claims = self.validate(credential)?;
        Ok(Principal::new(claims.user_id()?, claims.username()))
    }
}
