use crate::api::nullable;

use serde::Deserialize;

/// Partial update. `due_date: null` clears the date; an absent field leaves
/// it alone. Column and position change only through reorder, the assignee
/// only through assign.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub due_date: Option<Option<String>>,
}
