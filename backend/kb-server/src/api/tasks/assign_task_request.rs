use serde::Deserialize;

/// `user_id: null` (or absent) unassigns.
#[derive(Debug, Deserialize)]
pub struct AssignTaskRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}
