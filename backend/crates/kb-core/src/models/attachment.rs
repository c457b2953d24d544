use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for an uploaded file. The bytes live in the blob store under
/// `file_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Uuid,
    pub task_id: Uuid,
    pub file_key: String,
    pub name: String,
    pub size_bytes: i64,
    pub uploaded_by: Uuid,
    pub uploaded_at: DateTime<Utc>,
}

impl Attachment {
    pub fn new(
        task_id: Uuid,
        file_key: String,
        name: String,
        size_bytes: i64,
        uploaded_by: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            file_key,
            name,
            size_bytes,
            uploaded_by,
            uploaded_at: Utc::now(),
        }
    }
}
