use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProjectIdQuery {
    pub project_id: Option<String>,
}
