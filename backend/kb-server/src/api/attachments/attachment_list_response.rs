use crate::AttachmentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AttachmentListResponse {
    pub attachments: Vec<AttachmentDto>,
}
