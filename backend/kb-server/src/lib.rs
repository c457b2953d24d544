pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod storage;

#[cfg(test)]
mod tests;

pub use api::{
    attachments::{
        attachment_dto::AttachmentDto, attachment_list_response::AttachmentListResponse,
        attachment_response::AttachmentResponse,
        create_attachment_request::CreateAttachmentRequest,
        update_attachment_request::UpdateAttachmentRequest,
    },
    boards::{
        board_dto::BoardDto,
        board_light_dto::{BoardLightDto, BoardLightListResponse},
        board_list_response::BoardListResponse,
        board_response::BoardResponse,
        create_board_request::CreateBoardRequest,
        project_id_query::ProjectIdQuery,
        update_board_request::UpdateBoardRequest,
    },
    columns::{
        board_id_query::BoardIdQuery,
        column_dto::ColumnDto,
        column_light_dto::{ColumnLightDto, ColumnLightListResponse},
        column_list_response::ColumnListResponse,
        column_response::ColumnResponse,
        create_column_request::CreateColumnRequest,
        reorder_columns_request::ReorderColumnsRequest,
        update_column_request::UpdateColumnRequest,
    },
    comments::{
        comment_dto::CommentDto, comment_list_response::CommentListResponse,
        comment_response::CommentResponse, create_comment_request::CreateCommentRequest,
        update_comment_request::UpdateCommentRequest,
    },
    delete_response::DeleteResponse,
    detail_response::DetailResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{api_json::ApiJson, current_user::CurrentUser},
    projects::{
        create_board_from_template_request::CreateBoardFromTemplateRequest,
        create_from_template_request::CreateFromTemplateRequest,
        create_project_request::CreateProjectRequest,
        member_request::MemberRequest,
        project_dto::ProjectDto,
        project_light_dto::{ProjectLightDto, ProjectLightListResponse},
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        update_project_request::UpdateProjectRequest,
    },
    subtasks::{
        create_subtask_request::CreateSubTaskRequest, subtask_dto::SubTaskDto,
        subtask_list_response::SubTaskListResponse, subtask_response::SubTaskResponse,
        update_subtask_request::UpdateSubTaskRequest,
    },
    tags::{
        create_tag_request::CreateTagRequest, tag_dto::TagDto,
        tag_list_response::TagListResponse, tag_response::TagResponse,
        tag_task_request::TagTaskRequest, update_tag_request::UpdateTagRequest,
    },
    task_id_query::TaskIdQuery,
    tasks::{
        assign_task_request::AssignTaskRequest,
        column_detail_dto::{BoardRefDto, ColumnDetailDto},
        column_id_query::ColumnIdQuery,
        create_task_request::CreateTaskRequest,
        date_filter_query::DateFilterQuery,
        reorder_tasks_request::ReorderTasksRequest,
        tag_filter_query::TagFilterQuery,
        task_dto::TaskDto,
        task_light_dto::{TaskLightDto, TaskLightListResponse},
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        update_task_request::UpdateTaskRequest,
    },
    user_dto::UserDto,
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use storage::{BlobError, BlobStore, FsBlobStore};

pub use crate::routes::build_router;
