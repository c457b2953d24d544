use crate::{AttachmentDto, ColumnDetailDto, CommentDto, SubTaskDto, TagDto, UserDto};

use serde::Serialize;

/// Full task representation with every child collection inlined.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub created_by: UserDto,
    pub assigned_to: Option<UserDto>,
    pub position: i64,
    pub column_id: String,
    pub column_detail: ColumnDetailDto,
    pub subtasks: Vec<SubTaskDto>,
    pub tags: Vec<TagDto>,
    pub comments: Vec<CommentDto>,
    pub attachments: Vec<AttachmentDto>,
}
