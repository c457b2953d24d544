use crate::storage::{BlobError, BlobStore, Result as BlobResult};

use std::panic::Location;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

const MAX_SUFFIX_CHARS: usize = 64;

/// Blobs as flat files under one directory.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Create the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> BlobResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| BlobError::io(&root.display().to_string(), e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    #[track_caller]
    fn path_for(&self, key: &str) -> BlobResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(BlobError::InvalidKey {
                key: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(self.root.join(key))
    }
}

/// `<uuid>_<sanitized name>`; the name part only aids debugging on disk.
fn new_key(file_name: &str) -> String {
    let suffix: String = file_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .take(MAX_SUFFIX_CHARS)
        .collect();
    let id = Uuid::new_v4().simple();
    if suffix.is_empty() {
        id.to_string()
    } else {
        format!("{id}_{suffix}")
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> BlobResult<String> {
        let key = new_key(file_name);
        let path = self.path_for(&key)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| BlobError::io(&key, e))?;
        Ok(key)
    }

    async fn load(&self, key: &str) -> BlobResult<Vec<u8>> {
        let path = self.path_for(key)?;
        tokio::fs::read(&path)
            .await
            .map_err(|e| BlobError::io(key, e))
    }

    async fn delete(&self, key: &str) -> BlobResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Already gone is the desired end state.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BlobError::io(key, e)),
        }
    }
}
