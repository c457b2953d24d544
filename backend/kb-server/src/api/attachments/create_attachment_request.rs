use serde::Deserialize;

/// Upload body. The file travels base64-encoded (standard alphabet, padded).
#[derive(Debug, Deserialize)]
pub struct CreateAttachmentRequest {
    #[serde(default)]
    pub task_id: Option<String>,
    pub name: String,
    pub content_base64: String,
}
