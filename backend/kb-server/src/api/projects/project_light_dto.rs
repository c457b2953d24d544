use kb_core::Project;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectLightDto {
    pub id: String,
    pub name: String,
    pub is_archived: bool,
}

impl From<Project> for ProjectLightDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            is_archived: p.is_archived,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectLightListResponse {
    pub projects: Vec<ProjectLightDto>,
}
