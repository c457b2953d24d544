use crate::storage::BlobStore;

use kb_auth::{AuthProvider, Principal};
use kb_config::ValidationConfig;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` when auth is disabled; requests then act as `X-User-Id` or
    /// `default_principal`.
    pub auth: Option<Arc<dyn AuthProvider>>,
    pub blobs: Arc<dyn BlobStore>,
    pub default_principal: Principal,
    pub validation: ValidationConfig,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        auth: Option<Arc<dyn AuthProvider>>,
        blobs: Arc<dyn BlobStore>,
        default_principal: Principal,
        validation: ValidationConfig,
    ) -> Self {
        Self {
            pool,
            auth,
            blobs,
            default_principal,
            validation,
        }
    }
}
