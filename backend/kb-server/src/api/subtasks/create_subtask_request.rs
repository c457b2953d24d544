use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSubTaskRequest {
    #[serde(default)]
    pub task_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}
