//! Comment REST API handlers

use crate::api::params::{parse_id, required_id};
use crate::api::{guard, hierarchy};
use crate::{
    ApiError, ApiJson, ApiResult, AppState, CommentListResponse, CommentResponse,
    CreateCommentRequest, CurrentUser, DeleteResponse, TaskIdQuery, UpdateCommentRequest,
};

use kb_core::validation::validate_content;
use kb_core::{AccessPolicy, Comment, EntityRef};
use kb_db::CommentRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

/// GET /api/v1/comments
pub async fn list_comments(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<CommentListResponse>> {
    let comments = CommentRepository::find_visible(&state.pool, user.id()).await?;

    Ok(Json(CommentListResponse {
        comments: hierarchy::comment_dtos(&state.pool, comments).await?,
    }))
}

/// POST /api/v1/comments
pub async fn create_comment(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let task_id = required_id(req.task_id.as_deref(), "Task ID is required.")?;
    validate_content(&req.content, state.validation.max_comment_length)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "comment on this task",
    )
    .await?;

    let comment = Comment::new(task_id, user.id(), req.content);
    CommentRepository::create(&state.pool, &comment).await?;

    log::info!("Created comment {} on task {}", comment.id, task_id);

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            comment: hierarchy::comment_dto(&state.pool, comment).await?,
        }),
    ))
}

/// GET /api/v1/comments/{id}
pub async fn get_comment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<CommentResponse>> {
    let comment = CommentRepository::find_visible_by_id(&state.pool, parse_id(&id)?, user.id())
        .await?
        .ok_or_else(|| ApiError::not_found("Comment not found."))?;

    Ok(Json(CommentResponse {
        comment: hierarchy::comment_dto(&state.pool, comment).await?,
    }))
}

/// PATCH /api/v1/comments/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_id = parse_id(&id)?;
    validate_content(&req.content, state.validation.max_comment_length)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Comment(comment_id),
        AccessPolicy::MemberOrCreator,
        "update this comment",
    )
    .await?;

    let mut comment = CommentRepository::find_visible_by_id(&state.pool, comment_id, user.id())
        .await?
        .ok_or_else(|| ApiError::not_found("Comment not found."))?;
    comment.content = req.content;
    CommentRepository::update(&state.pool, &comment).await?;

    log::info!("Updated comment {}", comment.id);

    Ok(Json(CommentResponse {
        comment: hierarchy::comment_dto(&state.pool, comment).await?,
    }))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let comment_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Comment(comment_id),
        AccessPolicy::MemberOrCreator,
        "delete this comment",
    )
    .await?;

    CommentRepository::delete(&state.pool, comment_id).await?;

    log::info!("Deleted comment {}", comment_id);

    Ok(Json(DeleteResponse {
        deleted_id: comment_id.to_string(),
    }))
}

/// GET /api/v1/comments/task_comments?task_id=
///
/// Newest first.
pub async fn task_comments(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<CommentListResponse>> {
    let task_id = required_id(query.task_id.as_deref(), "Task ID is required.")?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "view comments for this task",
    )
    .await?;

    let comments = CommentRepository::find_by_task(&state.pool, task_id).await?;

    Ok(Json(CommentListResponse {
        comments: hierarchy::comment_dtos(&state.pool, comments).await?,
    }))
}
