use crate::TaskDto;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnDto {
    pub id: String,
    pub name: String,
    pub position: i64,
    pub color: String,
    pub wip_limit: Option<i64>,
    pub board_id: String,
    /// Ordered by position
    pub tasks: Vec<TaskDto>,
}
