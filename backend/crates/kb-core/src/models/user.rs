use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A principal known to the system. Rows are provisioned the first time a
/// verified principal makes a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Uuid, username: String) -> Self {
        Self {
            id,
            username,
            email: None,
            created_at: Utc::now(),
        }
    }
}
