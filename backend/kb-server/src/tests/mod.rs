mod api;
mod logger;

use crate::{AppState, FsBlobStore};

use kb_auth::{AuthProvider, Principal};
use kb_config::ValidationConfig;

use std::sync::Arc;

use tempfile::TempDir;
use uuid::Uuid;

pub(crate) const DEFAULT_USER: &str = "00000000-0000-0000-0000-000000000001";

/// In-memory database and a temporary blob directory. Keep the `TempDir`
/// alive for the duration of the test.
pub(crate) async fn create_test_state(auth: Option<Arc<dyn AuthProvider>>) -> (AppState, TempDir) {
    let pool = kb_db::open_in_memory().await.unwrap();
    let dir = TempDir::new().unwrap();
    let blobs = FsBlobStore::open(dir.path().join("blobs")).await.unwrap();

    let state = AppState::new(
        pool,
        auth,
        Arc::new(blobs),
        Principal::new(Uuid::parse_str(DEFAULT_USER).unwrap(), "local"),
        ValidationConfig::default(),
    );
    (state, dir)
}
