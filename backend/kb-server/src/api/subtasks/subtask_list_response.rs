use crate::SubTaskDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubTaskListResponse {
    pub subtasks: Vec<SubTaskDto>,
}
