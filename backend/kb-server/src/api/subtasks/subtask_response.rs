use crate::SubTaskDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubTaskResponse {
    pub subtask: SubTaskDto,
}
