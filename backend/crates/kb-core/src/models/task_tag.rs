use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTag {
    pub id: Uuid,
    pub task_id: Uuid,
    pub tag_id: Uuid,
}

impl TaskTag {
    pub fn new(task_id: Uuid, tag_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            tag_id,
        }
    }
}
