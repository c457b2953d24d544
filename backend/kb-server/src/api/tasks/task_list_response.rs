use crate::TaskDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskDto>,
}
