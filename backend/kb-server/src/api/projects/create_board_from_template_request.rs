use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBoardFromTemplateRequest {
    #[serde(default)]
    pub template_type: Option<String>,
    /// Defaults to "New Board"
    #[serde(default)]
    pub name: Option<String>,
}
