use crate::TagDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagListResponse {
    pub tags: Vec<TagDto>,
}
