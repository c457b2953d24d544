use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateSubTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}
