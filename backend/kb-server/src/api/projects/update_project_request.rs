use serde::Deserialize;

/// Archival changes go through the archive/unarchive actions.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}
