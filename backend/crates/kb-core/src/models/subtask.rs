use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTask {
    pub id: Uuid,
    pub task_id: Uuid,
    pub title: String,
    pub is_completed: bool,
}

impl SubTask {
    pub fn new(task_id: Uuid, title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            title,
            is_completed: false,
        }
    }
}
