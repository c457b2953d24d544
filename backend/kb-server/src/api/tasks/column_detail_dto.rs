use serde::Serialize;

/// Where a task sits: its column and the board above it.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDetailDto {
    pub id: String,
    pub name: String,
    pub board: BoardRefDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardRefDto {
    pub id: String,
    pub name: String,
    pub project_id: String,
}
