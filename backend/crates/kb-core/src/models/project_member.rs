use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ProjectMember {
    pub fn new(project_id: Uuid, user_id: Uuid) -> Self {
        Self {
            project_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
