use crate::ColumnDto;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BoardDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub project_id: String,
    pub columns: Vec<ColumnDto>,
}
