use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TaskLightDto {
    pub id: String,
    pub title: String,
    pub priority: String,
    pub due_date: Option<i64>,
    pub assigned_to: Option<UserDto>,
    pub position: i64,
}

#[derive(Debug, Serialize)]
pub struct TaskLightListResponse {
    pub tasks: Vec<TaskLightDto>,
}
