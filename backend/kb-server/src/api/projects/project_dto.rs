use crate::{BoardDto, UserDto};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: UserDto,
    /// Explicit members; the creator appears only when also added as one
    pub members: Vec<UserDto>,
    pub created_at: i64,
    pub updated_at: i64,
    pub is_archived: bool,
    pub boards: Vec<BoardDto>,
}
