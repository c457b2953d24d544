use crate::AttachmentDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AttachmentResponse {
    pub attachment: AttachmentDto,
}
