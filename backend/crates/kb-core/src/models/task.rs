//! Task entity - the unit of work that moves across columns.

use crate::TaskPriority;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A card on a board. `position` is dense within `column_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub column_id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    /// Must be the project creator or a member at the time of assignment.
    pub assigned_to: Option<Uuid>,
    pub position: i64,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(column_id: Uuid, title: String, created_by: Uuid, position: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            column_id,
            title,
            description: String::new(),
            priority: TaskPriority::default(),
            due_date: None,
            created_by,
            assigned_to: None,
            position,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}
