use crate::UserDto;

use kb_core::Attachment;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AttachmentDto {
    pub id: String,
    pub name: String,
    pub size_bytes: i64,
    pub uploaded_by: UserDto,
    pub uploaded_at: i64,
    pub task_id: String,
    /// Relative URL serving the file bytes
    pub content_url: String,
}

impl AttachmentDto {
    pub fn new(a: Attachment, uploaded_by: UserDto) -> Self {
        Self {
            content_url: format!("/api/v1/attachments/{}/content", a.id),
            id: a.id.to_string(),
            name: a.name,
            size_bytes: a.size_bytes,
            uploaded_by,
            uploaded_at: a.uploaded_at.timestamp(),
            task_id: a.task_id.to_string(),
        }
    }
}
