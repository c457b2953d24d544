use crate::UserDto;

use kb_core::Comment;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CommentDto {
    pub id: String,
    pub content: String,
    pub user: UserDto,
    pub created_at: i64,
    pub task_id: String,
}

impl CommentDto {
    pub fn new(c: Comment, user: UserDto) -> Self {
        Self {
            id: c.id.to_string(),
            content: c.content,
            user,
            created_at: c.created_at.timestamp(),
            task_id: c.task_id.to_string(),
        }
    }
}
