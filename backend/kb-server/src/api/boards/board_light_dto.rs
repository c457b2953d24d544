use kb_core::Board;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BoardLightDto {
    pub id: String,
    pub name: String,
    pub project_id: String,
}

impl From<Board> for BoardLightDto {
    fn from(b: Board) -> Self {
        Self {
            id: b.id.to_string(),
            name: b.name,
            project_id: b.project_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BoardLightListResponse {
    pub boards: Vec<BoardLightDto>,
}
