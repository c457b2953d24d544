use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_TAG_COLOR: &str = "#3490dc";

/// A label owned by a single user. `(name, user_id)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub user_id: Uuid,
}

impl Tag {
    pub fn new(name: String, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            color: DEFAULT_TAG_COLOR.to_string(),
            user_id,
        }
    }
}
