use serde::Deserialize;

/// `?task_id=` on the per-task listing actions.
#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    #[serde(default)]
    pub task_id: Option<String>,
}
