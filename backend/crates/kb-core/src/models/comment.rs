use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub task_id: Uuid,
    pub user_id: Uuid,

    pub content: String,

    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(task_id: Uuid, user_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            user_id,
            content,
            created_at: Utc::now(),
        }
    }
}
