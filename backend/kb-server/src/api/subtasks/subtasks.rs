//! SubTask REST API handlers

use crate::api::guard;
use crate::api::params::{parse_id, required_id};
use crate::{
    ApiError, ApiJson, ApiResult, AppState, CreateSubTaskRequest, CurrentUser, DeleteResponse,
    SubTaskDto, SubTaskListResponse, SubTaskResponse, TaskIdQuery, UpdateSubTaskRequest,
};

use kb_core::validation::validate_name;
use kb_core::{AccessPolicy, EntityRef, SubTask};
use kb_db::SubTaskRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

/// GET /api/v1/subtasks
pub async fn list_subtasks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<SubTaskListResponse>> {
    let subtasks = SubTaskRepository::find_visible(&state.pool, user.id()).await?;

    Ok(Json(SubTaskListResponse {
        subtasks: subtasks.into_iter().map(SubTaskDto::from).collect(),
    }))
}

/// POST /api/v1/subtasks
pub async fn create_subtask(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CreateSubTaskRequest>,
) -> ApiResult<(StatusCode, Json<SubTaskResponse>)> {
    let task_id = required_id(req.task_id.as_deref(), "Task ID is required.")?;
    let title = validate_name(
        "title",
        "Subtask title",
        &req.title,
        state.validation.max_title_length,
    )?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "create subtasks for this task",
    )
    .await?;

    let mut subtask = SubTask::new(task_id, title);
    subtask.is_completed = req.is_completed;
    SubTaskRepository::create(&state.pool, &subtask).await?;

    log::info!("Created subtask {} on task {}", subtask.id, task_id);

    Ok((
        StatusCode::CREATED,
        Json(SubTaskResponse {
            subtask: subtask.into(),
        }),
    ))
}

/// GET /api/v1/subtasks/{id}
pub async fn get_subtask(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<SubTaskResponse>> {
    let subtask = SubTaskRepository::find_visible_by_id(&state.pool, parse_id(&id)?, user.id())
        .await?
        .ok_or_else(|| ApiError::not_found("SubTask not found."))?;

    Ok(Json(SubTaskResponse {
        subtask: subtask.into(),
    }))
}

/// PATCH /api/v1/subtasks/{id}
pub async fn update_subtask(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateSubTaskRequest>,
) -> ApiResult<Json<SubTaskResponse>> {
    let subtask_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::SubTask(subtask_id),
        AccessPolicy::MemberOrCreator,
        "update this subtask",
    )
    .await?;

    let mut subtask = SubTaskRepository::find_visible_by_id(&state.pool, subtask_id, user.id())
        .await?
        .ok_or_else(|| ApiError::not_found("SubTask not found."))?;

    if let Some(title) = req.title {
        subtask.title = validate_name(
            "title",
            "Subtask title",
            &title,
            state.validation.max_title_length,
        )?;
    }
    if let Some(is_completed) = req.is_completed {
        subtask.is_completed = is_completed;
    }

    SubTaskRepository::update(&state.pool, &subtask).await?;

    log::info!("Updated subtask {}", subtask.id);

    Ok(Json(SubTaskResponse {
        subtask: subtask.into(),
    }))
}

/// DELETE /api/v1/subtasks/{id}
pub async fn delete_subtask(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let subtask_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::SubTask(subtask_id),
        AccessPolicy::MemberOrCreator,
        "delete this subtask",
    )
    .await?;

    SubTaskRepository::delete(&state.pool, subtask_id).await?;

    log::info!("Deleted subtask {}", subtask_id);

    Ok(Json(DeleteResponse {
        deleted_id: subtask_id.to_string(),
    }))
}

/// GET /api/v1/subtasks/task_subtasks?task_id=
pub async fn task_subtasks(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<SubTaskListResponse>> {
    let task_id = required_id(query.task_id.as_deref(), "Task ID is required.")?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "view subtasks for this task",
    )
    .await?;

    let subtasks = SubTaskRepository::find_by_task(&state.pool, task_id).await?;

    Ok(Json(SubTaskListResponse {
        subtasks: subtasks.into_iter().map(SubTaskDto::from).collect(),
    }))
}
