use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_COLUMN_COLOR: &str = "#e2e8f0";

/// An ordered lane on a board. `position` is dense within the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: String,
    pub color: String,
    pub wip_limit: Option<i64>,
    pub position: i64,
}

impl Column {
    pub fn new(board_id: Uuid, name: String, position: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            name,
            color: DEFAULT_COLUMN_COLOR.to_string(),
            wip_limit: None,
            position,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}
