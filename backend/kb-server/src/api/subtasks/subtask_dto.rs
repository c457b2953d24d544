use kb_core::SubTask;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SubTaskDto {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    pub task_id: String,
}

impl From<SubTask> for SubTaskDto {
    fn from(s: SubTask) -> Self {
        Self {
            id: s.id.to_string(),
            title: s.title,
            is_completed: s.is_completed,
            task_id: s.task_id.to_string(),
        }
    }
}
