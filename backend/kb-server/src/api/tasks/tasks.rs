//! Task REST API handlers
//!
//! Tasks are ordered within their column. Creation inserts at a slot,
//! reorder moves tasks between columns of one board, and delete closes the
//! gap it leaves.

use crate::api::params::{
    parse_date, parse_date_end, parse_id, parse_id_list, parse_priority, required_id,
};
use crate::api::{guard, hierarchy};
use crate::storage;
use crate::{
    ApiError, ApiJson, ApiResult, AppState, AssignTaskRequest, ColumnIdQuery, CreateTaskRequest,
    CurrentUser, DateFilterQuery, DeleteResponse, DetailResponse, ReorderTasksRequest, TagFilterQuery,
    TaskLightListResponse, TaskListResponse, TaskResponse, UpdateTaskRequest,
};

use kb_core::validation::validate_name;
use kb_core::{AccessPolicy, EntityRef, Task};
use kb_db::{
    ColumnRepository, ProjectMemberRepository, TaskFilter, TaskRepository, UserRepository,
    begin_write, cascade,
};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

const REORDER_FIELDS_REQUIRED: &str =
    "Source column ID, destination column ID, and task order are required.";

/// GET /api/v1/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<TaskListResponse>> {
    let tasks = TaskRepository::find_visible(&state.pool, user.id(), &TaskFilter::default()).await?;

    Ok(Json(TaskListResponse {
        tasks: hierarchy::task_dtos(&state.pool, tasks).await?,
    }))
}

/// POST /api/v1/tasks
pub async fn create_task(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let column_id = required_id(req.column_id.as_deref(), "Column ID is required.")?;
    let title = validate_name(
        "title",
        "Task title",
        &req.title,
        state.validation.max_title_length,
    )?;
    let priority = req.priority.as_deref().map(parse_priority).transpose()?;
    let due_date = req
        .due_date
        .as_deref()
        .map(|v| parse_date("due_date", v))
        .transpose()?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Column(column_id),
        AccessPolicy::MemberOrCreator,
        "create tasks in this column",
    )
    .await?;

    let mut task = Task::new(column_id, title, user.id(), 0);
    task.description = req.description;
    task.priority = priority.unwrap_or_default();
    task.due_date = due_date;

    let mut tx = begin_write(&state.pool).await?;
    task.position = TaskRepository::insert_at(&mut tx, &task, req.position).await?;
    tx.commit().await?;

    log::info!(
        "Created task {} in column {} at position {}",
        task.id,
        column_id,
        task.position
    );

    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            task: hierarchy::task_dto(&state.pool, task).await?,
        }),
    ))
}

/// GET /api/v1/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = parse_id(&id)?;
    let task = TaskRepository::find_visible_by_id(&state.pool, task_id, user.id())
        .await?
        .ok_or_else(|| task_not_found(task_id))?;

    Ok(Json(TaskResponse {
        task: hierarchy::task_dto(&state.pool, task).await?,
    }))
}

/// PATCH /api/v1/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "update this task",
    )
    .await?;

    let mut task = TaskRepository::find_visible_by_id(&state.pool, task_id, user.id())
        .await?
        .ok_or_else(|| task_not_found(task_id))?;

    if let Some(title) = req.title {
        task.title = validate_name(
            "title",
            "Task title",
            &title,
            state.validation.max_title_length,
        )?;
    }
    if let Some(description) = req.description {
        task.description = description;
    }
    if let Some(priority) = req.priority {
        task.priority = parse_priority(&priority)?;
    }
    if let Some(due_date) = req.due_date {
        task.due_date = due_date
            .as_deref()
            .map(|v| parse_date("due_date", v))
            .transpose()?;
    }
    task.updated_at = Utc::now();

    TaskRepository::update(&state.pool, &task).await?;

    log::info!("Updated task {}", task.id);

    Ok(Json(TaskResponse {
        task: hierarchy::task_dto(&state.pool, task).await?,
    }))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "delete this task",
    )
    .await?;

    let mut tx = begin_write(&state.pool).await?;
    let file_keys = cascade::delete_task(&mut tx, task_id).await?;
    tx.commit().await?;

    storage::discard(state.blobs.as_ref(), &file_keys).await;

    log::info!("Deleted task {}", task_id);

    Ok(Json(DeleteResponse {
        deleted_id: task_id.to_string(),
    }))
}

/// GET /api/v1/tasks/light
pub async fn list_tasks_light(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<TaskLightListResponse>> {
    let tasks = TaskRepository::find_visible(&state.pool, user.id(), &TaskFilter::default()).await?;

    Ok(Json(TaskLightListResponse {
        tasks: hierarchy::task_light_dtos(&state.pool, tasks).await?,
    }))
}

/// GET /api/v1/tasks/column_tasks?column_id=
pub async fn column_tasks(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ColumnIdQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let column_id = required_id(query.column_id.as_deref(), "Column ID is required.")?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Column(column_id),
        AccessPolicy::MemberOrCreator,
        "view tasks in this column",
    )
    .await?;

    let tasks = TaskRepository::find_by_column(&state.pool, column_id).await?;

    Ok(Json(TaskListResponse {
        tasks: hierarchy::task_dtos(&state.pool, tasks).await?,
    }))
}

/// POST /api/v1/tasks/reorder
///
/// Tasks listed in `task_order` that currently sit in the source column move
/// to the destination at their list index. Anything else is left in place.
/// One unknown id rolls the whole request back.
pub async fn reorder_tasks(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<ReorderTasksRequest>,
) -> ApiResult<Json<DetailResponse>> {
    let source_id = required_id(req.source_column_id.as_deref(), REORDER_FIELDS_REQUIRED)?;
    let destination_id = required_id(req.destination_column_id.as_deref(), REORDER_FIELDS_REQUIRED)?;
    let order = match req.task_order {
        Some(order) if !order.is_empty() => order
            .iter()
            .map(|id| parse_id(id))
            .collect::<ApiResult<Vec<Uuid>>>()?,
        _ => return Err(ApiError::bad_request(REORDER_FIELDS_REQUIRED)),
    };

    let source = ColumnRepository::find_by_id(&state.pool, source_id)
        .await?
        .ok_or_else(|| column_not_found(source_id))?;
    let destination = ColumnRepository::find_by_id(&state.pool, destination_id)
        .await?
        .ok_or_else(|| column_not_found(destination_id))?;

    if source.board_id != destination.board_id {
        return Err(ApiError::bad_request(
            "Cannot move tasks between different boards.",
        ));
    }

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Board(source.board_id),
        AccessPolicy::MemberOrCreator,
        "reorder tasks in this board",
    )
    .await?;

    let mut tx = begin_write(&state.pool).await?;
    TaskRepository::move_tasks(&mut tx, source_id, destination_id, &order).await?;
    tx.commit().await?;

    log::info!(
        "Reordered {} tasks from column {} to column {}",
        order.len(),
        source_id,
        destination_id
    );

    Ok(Json(DetailResponse::new("Tasks reordered successfully.")))
}

/// POST /api/v1/tasks/{id}/assign
pub async fn assign_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AssignTaskRequest>,
) -> ApiResult<Json<DetailResponse>> {
    let task_id = parse_id(&id)?;

    let access = guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "assign tasks in this project",
    )
    .await?;

    let assignee = req
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(parse_id)
        .transpose()?;

    let Some(assignee) = assignee else {
        TaskRepository::set_assignee(&state.pool, task_id, None, Utc::now()).await?;
        log::info!("Unassigned task {}", task_id);
        return Ok(Json(DetailResponse::new("Task unassigned successfully.")));
    };

    let target = UserRepository::find_by_id(&state.pool, assignee)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    let eligible = access.created_by == target.id
        || ProjectMemberRepository::is_member(&state.pool, access.project_id, target.id).await?;
    if !eligible {
        return Err(ApiError::bad_request(
            "Cannot assign task to a user who is not a member of the project.",
        ));
    }

    TaskRepository::set_assignee(&state.pool, task_id, Some(target.id), Utc::now()).await?;

    log::info!("Assigned task {} to user {}", task_id, target.id);

    Ok(Json(DetailResponse::new(format!(
        "Task assigned to {} successfully.",
        target.username
    ))))
}

/// GET /api/v1/tasks/my_tasks
///
/// Every task assigned to the caller, including tasks in projects they have
/// since left.
pub async fn my_tasks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<TaskListResponse>> {
    let tasks = TaskRepository::find_assigned_to(&state.pool, user.id()).await?;

    Ok(Json(TaskListResponse {
        tasks: hierarchy::task_dtos(&state.pool, tasks).await?,
    }))
}

/// GET /api/v1/tasks/date_filter?start_date=&end_date=
pub async fn date_filter(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<DateFilterQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let filter = TaskFilter {
        due_from: non_blank(query.start_date.as_deref())
            .map(|v| parse_date("start_date", v))
            .transpose()?,
        due_to: non_blank(query.end_date.as_deref())
            .map(|v| parse_date_end("end_date", v))
            .transpose()?,
        ..TaskFilter::default()
    };

    let tasks = TaskRepository::find_visible(&state.pool, user.id(), &filter).await?;

    Ok(Json(TaskListResponse {
        tasks: hierarchy::task_dtos(&state.pool, tasks).await?,
    }))
}

/// GET /api/v1/tasks/filter_by_tags?tag_ids=a,b,c
///
/// A task matches only when it carries every listed tag.
pub async fn filter_by_tags(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<TagFilterQuery>,
) -> ApiResult<Json<TaskListResponse>> {
    let tag_ids = parse_id_list(query.tag_ids.as_deref().unwrap_or_default())?;
    if tag_ids.is_empty() {
        return Err(ApiError::bad_request("Tag IDs are required."));
    }

    let filter = TaskFilter {
        all_tags: tag_ids,
        ..TaskFilter::default()
    };
    let tasks = TaskRepository::find_visible(&state.pool, user.id(), &filter).await?;

    Ok(Json(TaskListResponse {
        tasks: hierarchy::task_dtos(&state.pool, tasks).await?,
    }))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn column_not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Column not found for id {id}."))
}

fn task_not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Task not found for id {id}."))
}
