use serde::Deserialize;

/// Body of `add_to_task` / `remove_from_task`.
#[derive(Debug, Deserialize)]
pub struct TagTaskRequest {
    #[serde(default)]
    pub task_id: Option<String>,
}
