use crate::TagDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagResponse {
    pub tag: TagDto,
}
