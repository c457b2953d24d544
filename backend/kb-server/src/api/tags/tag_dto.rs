use kb_core::Tag;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TagDto {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl From<Tag> for TagDto {
    fn from(t: Tag) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name,
            color: t.color,
        }
    }
}
