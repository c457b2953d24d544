//! Project entity - top-level container for boards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project groups boards and defines who may see or change them.
/// The creator is always treated as a member even when absent from the
/// membership table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_by: Uuid,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: String, description: String, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_by,
            is_archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_creator(&self, user_id: Uuid) -> bool {
        self.created_by == user_id
    }
}
