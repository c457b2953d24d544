use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFromTemplateRequest {
    #[serde(default)]
    pub template_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}
