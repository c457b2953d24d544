//! Assembly of nested response DTOs.
//!
//! A project response embeds its boards, a board its columns, a column its
//! tasks and a task all of its children. [`DtoBuilder`] walks that tree with
//! the pool and memoizes user and column lookups for the lifetime of one
//! response.

use crate::{
    ApiError, ApiResult, AttachmentDto, BoardDto, BoardRefDto, ColumnDetailDto, ColumnDto,
    CommentDto, ProjectDto, SubTaskDto, TagDto, TaskDto, TaskLightDto, UserDto,
};

use kb_core::{Attachment, Board, Column, Comment, Project, Task};
use kb_db::{
    AttachmentRepository, BoardRepository, ColumnRepository, CommentRepository,
    ProjectMemberRepository, SubTaskRepository, TagRepository, TaskRepository, UserRepository,
};

use std::collections::HashMap;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct DtoBuilder<'a> {
    pool: &'a SqlitePool,
    users: HashMap<Uuid, UserDto>,
    column_details: HashMap<Uuid, ColumnDetailDto>,
}

impl<'a> DtoBuilder<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            pool,
            users: HashMap::new(),
            column_details: HashMap::new(),
        }
    }

    /// A referenced user must exist; a dangling id is a server fault.
    pub async fn user(&mut self, id: Uuid) -> ApiResult<UserDto> {
        if let Some(user) = self.users.get(&id) {
            return Ok(user.clone());
        }

        let user = UserRepository::find_by_id(self.pool, id)
            .await?
            .ok_or_else(|| ApiError::internal(format!("User {id} is referenced but missing")))?;
        let dto = UserDto::from(user);
        self.users.insert(id, dto.clone());
        Ok(dto)
    }

    async fn column_detail(&mut self, column_id: Uuid) -> ApiResult<ColumnDetailDto> {
        if let Some(detail) = self.column_details.get(&column_id) {
            return Ok(detail.clone());
        }

        let column = ColumnRepository::find_by_id(self.pool, column_id)
            .await?
            .ok_or_else(|| ApiError::internal(format!("Column {column_id} is missing")))?;
        let board = BoardRepository::find_by_id(self.pool, column.board_id)
            .await?
            .ok_or_else(|| ApiError::internal(format!("Board {} is missing", column.board_id)))?;

        let detail = ColumnDetailDto {
            id: column.id.to_string(),
            name: column.name,
            board: BoardRefDto {
                id: board.id.to_string(),
                name: board.name,
                project_id: board.project_id.to_string(),
            },
        };
        self.column_details.insert(column_id, detail.clone());
        Ok(detail)
    }

    pub async fn comment(&mut self, comment: Comment) -> ApiResult<CommentDto> {
        let user = self.user(comment.user_id).await?;
        Ok(CommentDto::new(comment, user))
    }

    pub async fn attachment(&mut self, attachment: Attachment) -> ApiResult<AttachmentDto> {
        let uploaded_by = self.user(attachment.uploaded_by).await?;
        Ok(AttachmentDto::new(attachment, uploaded_by))
    }

    pub async fn task(&mut self, task: Task) -> ApiResult<TaskDto> {
        let created_by = self.user(task.created_by).await?;
        let assigned_to = match task.assigned_to {
            Some(id) => Some(self.user(id).await?),
            None => None,
        };
        let column_detail = self.column_detail(task.column_id).await?;

        let subtasks = SubTaskRepository::find_by_task(self.pool, task.id)
            .await?
            .into_iter()
            .map(SubTaskDto::from)
            .collect();
        let tags = TagRepository::find_by_task(self.pool, task.id)
            .await?
            .into_iter()
            .map(TagDto::from)
            .collect();

        let mut comments = Vec::new();
        for comment in CommentRepository::find_by_task(self.pool, task.id).await? {
            comments.push(self.comment(comment).await?);
        }
        let mut attachments = Vec::new();
        for attachment in AttachmentRepository::find_by_task(self.pool, task.id).await? {
            attachments.push(self.attachment(attachment).await?);
        }

        Ok(TaskDto {
            id: task.id.to_string(),
            title: task.title,
            description: task.description,
            priority: task.priority.as_str().to_string(),
            due_date: task.due_date.map(|d| d.timestamp()),
            created_at: task.created_at.timestamp(),
            updated_at: task.updated_at.timestamp(),
            created_by,
            assigned_to,
            position: task.position,
            column_id: task.column_id.to_string(),
            column_detail,
            subtasks,
            tags,
            comments,
            attachments,
        })
    }

    pub async fn task_light(&mut self, task: Task) -> ApiResult<TaskLightDto> {
        let assigned_to = match task.assigned_to {
            Some(id) => Some(self.user(id).await?),
            None => None,
        };

        Ok(TaskLightDto {
            id: task.id.to_string(),
            title: task.title,
            priority: task.priority.as_str().to_string(),
            due_date: task.due_date.map(|d| d.timestamp()),
            assigned_to,
            position: task.position,
        })
    }

    pub async fn column(&mut self, column: Column) -> ApiResult<ColumnDto> {
        let mut tasks = Vec::new();
        for task in TaskRepository::find_by_column(self.pool, column.id).await? {
            tasks.push(self.task(task).await?);
        }

        Ok(ColumnDto {
            id: column.id.to_string(),
            name: column.name,
            position: column.position,
            color: column.color,
            wip_limit: column.wip_limit,
            board_id: column.board_id.to_string(),
            tasks,
        })
    }

    pub async fn board(&mut self, board: Board) -> ApiResult<BoardDto> {
        let mut columns = Vec::new();
        for column in ColumnRepository::find_by_board(self.pool, board.id).await? {
            columns.push(self.column(column).await?);
        }

        Ok(BoardDto {
            id: board.id.to_string(),
            name: board.name,
            description: board.description,
            project_id: board.project_id.to_string(),
            columns,
        })
    }

    pub async fn project(&mut self, project: Project) -> ApiResult<ProjectDto> {
        let created_by = self.user(project.created_by).await?;

        let mut members = Vec::new();
        for user_id in ProjectMemberRepository::find_user_ids(self.pool, project.id).await? {
            members.push(self.user(user_id).await?);
        }

        let mut boards = Vec::new();
        for board in BoardRepository::find_by_project(self.pool, project.id).await? {
            boards.push(self.board(board).await?);
        }

        Ok(ProjectDto {
            id: project.id.to_string(),
            name: project.name,
            description: project.description,
            created_by,
            members,
            created_at: project.created_at.timestamp(),
            updated_at: project.updated_at.timestamp(),
            is_archived: project.is_archived,
            boards,
        })
    }
}

pub async fn comment_dto(pool: &SqlitePool, comment: Comment) -> ApiResult<CommentDto> {
    DtoBuilder::new(pool).comment(comment).await
}

pub async fn comment_dtos(pool: &SqlitePool, comments: Vec<Comment>) -> ApiResult<Vec<CommentDto>> {
    let mut builder = DtoBuilder::new(pool);
    let mut dtos = Vec::with_capacity(comments.len());
    for comment in comments {
        dtos.push(builder.comment(comment).await?);
    }
    Ok(dtos)
}

pub async fn attachment_dto(pool: &SqlitePool, attachment: Attachment) -> ApiResult<AttachmentDto> {
    DtoBuilder::new(pool).attachment(attachment).await
}

pub async fn attachment_dtos(
    pool: &SqlitePool,
    attachments: Vec<Attachment>,
) -> ApiResult<Vec<AttachmentDto>> {
    let mut builder = DtoBuilder::new(pool);
    let mut dtos = Vec::with_capacity(attachments.len());
    for attachment in attachments {
        dtos.push(builder.attachment(attachment).await?);
    }
    Ok(dtos)
}

pub async fn task_dto(pool: &SqlitePool, task: Task) -> ApiResult<TaskDto> {
    DtoBuilder::new(pool).task(task).await
}

pub async fn task_dtos(pool: &SqlitePool, tasks: Vec<Task>) -> ApiResult<Vec<TaskDto>> {
    let mut builder = DtoBuilder::new(pool);
    let mut dtos = Vec::with_capacity(tasks.len());
    for task in tasks {
        dtos.push(builder.task(task).await?);
    }
    Ok(dtos)
}

pub async fn task_light_dtos(pool: &SqlitePool, tasks: Vec<Task>) -> ApiResult<Vec<TaskLightDto>> {
    let mut builder = DtoBuilder::new(pool);
    let mut dtos = Vec::with_capacity(tasks.len());
    for task in tasks {
        dtos.push(builder.task_light(task).await?);
    }
    Ok(dtos)
}

pub async fn column_dto(pool: &SqlitePool, column: Column) -> ApiResult<ColumnDto> {
    DtoBuilder::new(pool).column(column).await
}

pub async fn column_dtos(pool: &SqlitePool, columns: Vec<Column>) -> ApiResult<Vec<ColumnDto>> {
    let mut builder = DtoBuilder::new(pool);
    let mut dtos = Vec::with_capacity(columns.len());
    for column in columns {
        dtos.push(builder.column(column).await?);
    }
    Ok(dtos)
}

pub async fn board_dto(pool: &SqlitePool, board: Board) -> ApiResult<BoardDto> {
    DtoBuilder::new(pool).board(board).await
}

pub async fn board_dtos(pool: &SqlitePool, boards: Vec<Board>) -> ApiResult<Vec<BoardDto>> {
    let mut builder = DtoBuilder::new(pool);
    let mut dtos = Vec::with_capacity(boards.len());
    for board in boards {
        dtos.push(builder.board(board).await?);
    }
    Ok(dtos)
}

pub async fn project_dto(pool: &SqlitePool, project: Project) -> ApiResult<ProjectDto> {
    DtoBuilder::new(pool).project(project).await
}

pub async fn project_dtos(pool: &SqlitePool, projects: Vec<Project>) -> ApiResult<Vec<ProjectDto>> {
    let mut builder = DtoBuilder::new(pool);
    let mut dtos = Vec::with_capacity(projects.len());
    for project in projects {
        dtos.push(builder.project(project).await?);
    }
    Ok(dtos)
}
