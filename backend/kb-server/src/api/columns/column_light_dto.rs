use kb_core::Column;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnLightDto {
    pub id: String,
    pub name: String,
    pub position: i64,
    pub color: String,
    pub board_id: String,
}

impl From<Column> for ColumnLightDto {
    fn from(c: Column) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            position: c.position,
            color: c.color,
            board_id: c.board_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ColumnLightListResponse {
    pub columns: Vec<ColumnLightDto>,
}
