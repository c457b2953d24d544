use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateAttachmentRequest {
    pub name: String,
}
