//! Attachment REST API handlers
//!
//! Metadata lives in the database, bytes in the [`crate::storage::BlobStore`].
//! Blob removal always happens after the row is gone.

use crate::api::params::{parse_id, required_id};
use crate::api::{guard, hierarchy};
use crate::storage;
use crate::{
    ApiError, ApiJson, ApiResult, AppState, AttachmentListResponse, AttachmentResponse,
    CreateAttachmentRequest, CurrentUser, DeleteResponse, TaskIdQuery, UpdateAttachmentRequest,
};

use kb_core::validation::{validate_attachment_size, validate_name};
use kb_core::{AccessPolicy, Attachment, EntityRef};
use kb_db::AttachmentRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// GET /api/v1/attachments
pub async fn list_attachments(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<AttachmentListResponse>> {
    let attachments = AttachmentRepository::find_visible(&state.pool, user.id()).await?;

    Ok(Json(AttachmentListResponse {
        attachments: hierarchy::attachment_dtos(&state.pool, attachments).await?,
    }))
}

/// POST /api/v1/attachments
pub async fn create_attachment(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CreateAttachmentRequest>,
) -> ApiResult<(StatusCode, Json<AttachmentResponse>)> {
    let task_id = required_id(req.task_id.as_deref(), "Task ID is required.")?;
    let name = validate_name(
        "name",
        "Attachment name",
        &req.name,
        state.validation.max_name_length,
    )?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "add attachments to this task",
    )
    .await?;

    let bytes = BASE64
        .decode(req.content_base64.trim())
        .map_err(|_| ApiError::validation("File content is not valid base64.", Some("file")))?;
    validate_attachment_size(bytes.len() as u64)?;

    let file_key = state.blobs.store(&name, &bytes).await?;
    let size_bytes = i64::try_from(bytes.len()).unwrap_or(i64::MAX);
    let attachment = Attachment::new(task_id, file_key, name, size_bytes, user.id());

    if let Err(e) = AttachmentRepository::create(&state.pool, &attachment).await {
        storage::discard(state.blobs.as_ref(), std::slice::from_ref(&attachment.file_key)).await;
        return Err(e.into());
    }

    log::info!(
        "Stored attachment {} ({} bytes) on task {}",
        attachment.id,
        attachment.size_bytes,
        task_id
    );

    Ok((
        StatusCode::CREATED,
        Json(AttachmentResponse {
            attachment: hierarchy::attachment_dto(&state.pool, attachment).await?,
        }),
    ))
}

/// GET /api/v1/attachments/{id}
pub async fn get_attachment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<AttachmentResponse>> {
    let attachment =
        AttachmentRepository::find_visible_by_id(&state.pool, parse_id(&id)?, user.id())
            .await?
            .ok_or_else(|| ApiError::not_found("Attachment not found."))?;

    Ok(Json(AttachmentResponse {
        attachment: hierarchy::attachment_dto(&state.pool, attachment).await?,
    }))
}

/// GET /api/v1/attachments/{id}/content
pub async fn download_attachment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let attachment =
        AttachmentRepository::find_visible_by_id(&state.pool, parse_id(&id)?, user.id())
            .await?
            .ok_or_else(|| ApiError::not_found("Attachment not found."))?;

    let bytes = state.blobs.load(&attachment.file_key).await?;
    let file_name: String = attachment
        .name
        .chars()
        .map(|c| if c == '"' || c.is_control() { '_' } else { c })
        .collect();

    Ok((
        [
            (CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// PATCH /api/v1/attachments/{id}
///
/// Only the display name can change; replace the file by uploading anew.
pub async fn update_attachment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateAttachmentRequest>,
) -> ApiResult<Json<AttachmentResponse>> {
    let attachment_id = parse_id(&id)?;
    let name = validate_name(
        "name",
        "Attachment name",
        &req.name,
        state.validation.max_name_length,
    )?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Attachment(attachment_id),
        AccessPolicy::MemberOrCreator,
        "update this attachment",
    )
    .await?;

    AttachmentRepository::rename(&state.pool, attachment_id, &name).await?;

    let attachment =
        AttachmentRepository::find_visible_by_id(&state.pool, attachment_id, user.id())
            .await?
            .ok_or_else(|| ApiError::not_found("Attachment not found."))?;

    log::info!("Renamed attachment {}", attachment_id);

    Ok(Json(AttachmentResponse {
        attachment: hierarchy::attachment_dto(&state.pool, attachment).await?,
    }))
}

/// DELETE /api/v1/attachments/{id}
pub async fn delete_attachment(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let attachment_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Attachment(attachment_id),
        AccessPolicy::MemberOrCreator,
        "delete this attachment",
    )
    .await?;

    let attachment =
        AttachmentRepository::find_visible_by_id(&state.pool, attachment_id, user.id())
            .await?
            .ok_or_else(|| ApiError::not_found("Attachment not found."))?;

    AttachmentRepository::delete(&state.pool, attachment_id).await?;
    storage::discard(state.blobs.as_ref(), &[attachment.file_key]).await;

    log::info!("Deleted attachment {}", attachment_id);

    Ok(Json(DeleteResponse {
        deleted_id: attachment_id.to_string(),
    }))
}

/// GET /api/v1/attachments/task_attachments?task_id=
pub async fn task_attachments(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<TaskIdQuery>,
) -> ApiResult<Json<AttachmentListResponse>> {
    let task_id = required_id(query.task_id.as_deref(), "Task ID is required.")?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Task(task_id),
        AccessPolicy::MemberOrCreator,
        "view attachments for this task",
    )
    .await?;

    let attachments = AttachmentRepository::find_by_task(&state.pool, task_id).await?;

    Ok(Json(AttachmentListResponse {
        attachments: hierarchy::attachment_dtos(&state.pool, attachments).await?,
    }))
}
