use crate::Result as AuthErrorResult;

use uuid::Uuid;

/// The verified identity behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub username: String,
}

impl Principal {
    pub fn new(user_id: Uuid, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

/// Turns a raw credential into a [`Principal`].
pub trait AuthProvider: Send + Sync {
    fn verify(&self, credential: &str) -> AuthErrorResult<Principal>;
}
