//! Tag REST API handlers
//!
//! Tags belong to the user who created them; someone else's tag is simply
//! not found. Attaching a tag to a task also requires access to the task's
//! project.

use crate::api::guard;
use crate::api::params::{parse_id, required_id};
use crate::{
    ApiError, ApiJson, ApiResult, AppState, CreateTagRequest, CurrentUser, DeleteResponse,
    DetailResponse, TagDto, TagListResponse, TagResponse, TagTaskRequest, UpdateTagRequest,
};

use kb_core::validation::{validate_color, validate_name};
use kb_core::{AccessPolicy, EntityRef, Tag, TaskTag};
use kb_db::{TagRepository, TaskTagRepository, begin_write, cascade};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

const DUPLICATE_TAG_NAME: &str = "You already have a tag with this name.";

async fn find_owned_tag(state: &AppState, id: Uuid, owner: Uuid) -> ApiResult<Tag> {
    TagRepository::find_owned(&state.pool, id, owner)
        .await?
        .ok_or_else(|| ApiError::not_found("Tag not found."))
}

/// GET /api/v1/tags
pub async fn list_tags(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<TagListResponse>> {
    let tags = TagRepository::find_by_owner(&state.pool, user.id()).await?;

    Ok(Json(TagListResponse {
        tags: tags.into_iter().map(TagDto::from).collect(),
    }))
}

/// POST /api/v1/tags
pub async fn create_tag(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CreateTagRequest>,
) -> ApiResult<(StatusCode, Json<TagResponse>)> {
    let name = validate_name(
        "name",
        "Tag name",
        &req.name,
        state.validation.max_tag_name_length,
    )?;

    let mut tag = Tag::new(name, user.id());
    if let Some(color) = req.color {
        validate_color("color", &color)?;
        tag.color = color;
    }

    if TagRepository::name_taken(&state.pool, user.id(), &tag.name, None).await? {
        return Err(ApiError::conflict(DUPLICATE_TAG_NAME));
    }

    TagRepository::create(&state.pool, &tag).await?;

    log::info!("Created tag {} for user {}", tag.id, user.id());

    Ok((StatusCode::CREATED, Json(TagResponse { tag: tag.into() })))
}

/// GET /api/v1/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TagResponse>> {
    let tag = find_owned_tag(&state, parse_id(&id)?, user.id()).await?;

    Ok(Json(TagResponse { tag: tag.into() }))
}

/// PATCH /api/v1/tags/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateTagRequest>,
) -> ApiResult<Json<TagResponse>> {
    let mut tag = find_owned_tag(&state, parse_id(&id)?, user.id()).await?;

    if let Some(name) = req.name {
        let name = validate_name(
            "name",
            "Tag name",
            &name,
            state.validation.max_tag_name_length,
        )?;
        if TagRepository::name_taken(&state.pool, user.id(), &name, Some(tag.id)).await? {
            return Err(ApiError::conflict(DUPLICATE_TAG_NAME));
        }
        tag.name = name;
    }

    if let Some(color) = req.color {
        validate_color("color", &color)?;
        tag.color = color;
    }

    TagRepository::update(&state.pool, &tag).await?;

    log::info!("Updated tag {}", tag.id);

    Ok(Json(TagResponse { tag: tag.into() }))
}

/// DELETE /api/v1/tags/{id}
///
/// Detaches the tag from every task first; the tasks themselves stay.
pub async fn delete_tag(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let tag = find_owned_tag(&state, parse_id(&id)?, user.id()).await?;

    let mut tx = begin_write(&state.pool).await?;
    cascade::delete_tag(&mut tx, tag.id).await?;
    tx.commit().await?;

    log::info!("Deleted tag {}", tag.id);

    Ok(Json(DeleteResponse {
        deleted_id: tag.id.to_string(),
    }))
}

/// POST /api/v1/tags/{id}/add_to_task
pub async fn add_to_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<TagTaskRequest>,
) -> ApiResult<Json<DetailResponse>> {
    let tag = find_owned_tag(&state, parse_id(&id)?, user.id()).await?;
    let task_id = required_id(req.task_id.as_deref(), "Task ID is required.")?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "add tags to this task",
    )
    .await?;

    if TaskTagRepository::exists(&state.pool, task_id, tag.id).await? {
        return Err(ApiError::conflict("Tag is already added to this task."));
    }

    if !TaskTagRepository::create(&state.pool, &TaskTag::new(task_id, tag.id)).await? {
        return Err(ApiError::conflict("Tag is already added to this task."));
    }

    log::info!("Attached tag {} to task {}", tag.id, task_id);

    Ok(Json(DetailResponse::new("Tag added to task successfully.")))
}

/// POST /api/v1/tags/{id}/remove_from_task
pub async fn remove_from_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<TagTaskRequest>,
) -> ApiResult<Json<DetailResponse>> {
    let tag = find_owned_tag(&state, parse_id(&id)?, user.id()).await?;
    let task_id = required_id(req.task_id.as_deref(), "Task ID is required.")?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "remove tags from this task",
    )
    .await?;

    if !TaskTagRepository::delete(&state.pool, task_id, tag.id).await? {
        return Err(ApiError::bad_request("Tag is not added to this task."));
    }

    log::info!("Detached tag {} from task {}", tag.id, task_id);

    Ok(Json(DetailResponse::new("Tag removed from task successfully.")))
}
