use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub description: String,
}

impl Board {
    pub fn new(project_id: Uuid, name: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            name,
            description,
        }
    }
}
