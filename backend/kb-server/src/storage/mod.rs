mod blob_store;
mod fs_blob_store;

pub use blob_store::{BlobError, BlobStore, Result};
pub use fs_blob_store::FsBlobStore;

use log::warn;

/// Remove blobs whose rows are already gone. Failures are logged and skipped.
pub async fn discard(blobs: &dyn BlobStore, keys: &[String]) {
    for key in keys {
        if let Err(e) = blobs.delete(key).await {
            warn!("Failed to delete blob {}: {}", key, e);
        }
    }
}
