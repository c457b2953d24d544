use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    #[serde(default)]
    pub project_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
