//! Column REST API handlers

use crate::api::params::{parse_id, required_id};
use crate::api::{guard, hierarchy};
use crate::storage;
use crate::{
    ApiError, ApiJson, ApiResult, AppState, BoardIdQuery, ColumnLightDto, ColumnLightListResponse,
    ColumnListResponse, ColumnResponse, CreateColumnRequest, CurrentUser, DeleteResponse,
    DetailResponse, ReorderColumnsRequest, UpdateColumnRequest,
};

use kb_core::validation::{validate_color, validate_name, validate_wip_limit};
use kb_core::{AccessPolicy, Column, EntityRef};
use kb_db::{ColumnRepository, begin_write, cascade};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

const REORDER_FIELDS_REQUIRED: &str = "Board ID and column order are required.";

/// GET /api/v1/columns
pub async fn list_columns(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<ColumnListResponse>> {
    let columns = ColumnRepository::find_visible(&state.pool, user.id()).await?;

    Ok(Json(ColumnListResponse {
        columns: hierarchy::column_dtos(&state.pool, columns).await?,
    }))
}

/// POST /api/v1/columns
pub async fn create_column(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CreateColumnRequest>,
) -> ApiResult<(StatusCode, Json<ColumnResponse>)> {
    let board_id = required_id(req.board_id.as_deref(), "Board ID is required.")?;
    let name = validate_name(
        "name",
        "Column name",
        &req.name,
        state.validation.max_name_length,
    )?;
    validate_wip_limit(req.wip_limit)?;
    if let Some(color) = &req.color {
        validate_color("color", color)?;
    }

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Board(board_id),
        AccessPolicy::MemberOrCreator,
        "create columns in this board",
    )
    .await?;

    let mut column = Column::new(board_id, name, 0);
    if let Some(color) = req.color {
        column = column.with_color(color);
    }
    column.wip_limit = req.wip_limit;

    let mut tx = begin_write(&state.pool).await?;
    column.position = ColumnRepository::insert_at(&mut tx, &column, req.position).await?;
    tx.commit().await?;

    log::info!(
        "Created column {} in board {} at position {}",
        column.id,
        board_id,
        column.position
    );

    Ok((
        StatusCode::CREATED,
        Json(ColumnResponse {
            column: hierarchy::column_dto(&state.pool, column).await?,
        }),
    ))
}

/// GET /api/v1/columns/{id}
pub async fn get_column(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ColumnResponse>> {
    let column_id = parse_id(&id)?;
    let column = ColumnRepository::find_visible_by_id(&state.pool, column_id, user.id())
        .await?
        .ok_or_else(|| column_not_found(column_id))?;

    Ok(Json(ColumnResponse {
        column: hierarchy::column_dto(&state.pool, column).await?,
    }))
}

/// PATCH /api/v1/columns/{id}
pub async fn update_column(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateColumnRequest>,
) -> ApiResult<Json<ColumnResponse>> {
    let column_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Column(column_id),
        AccessPolicy::MemberOrCreator,
        "update this column",
    )
    .await?;

    let mut column = ColumnRepository::find_visible_by_id(&state.pool, column_id, user.id())
        .await?
        .ok_or_else(|| column_not_found(column_id))?;

    if let Some(name) = req.name {
        column.name = validate_name(
            "name",
            "Column name",
            &name,
            state.validation.max_name_length,
        )?;
    }
    if let Some(color) = req.color {
        validate_color("color", &color)?;
        column.color = color;
    }
    if let Some(wip_limit) = req.wip_limit {
        validate_wip_limit(wip_limit)?;
        column.wip_limit = wip_limit;
    }

    ColumnRepository::update(&state.pool, &column).await?;

    log::info!("Updated column {}", column.id);

    Ok(Json(ColumnResponse {
        column: hierarchy::column_dto(&state.pool, column).await?,
    }))
}

/// DELETE /api/v1/columns/{id}
///
/// Removes the column's tasks with it and closes the gap in the board.
pub async fn delete_column(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let column_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Column(column_id),
        AccessPolicy::MemberOrCreator,
        "delete this column",
    )
    .await?;

    let mut tx = begin_write(&state.pool).await?;
    let file_keys = cascade::delete_column(&mut tx, column_id).await?;
    tx.commit().await?;

    storage::discard(state.blobs.as_ref(), &file_keys).await;

    log::info!("Deleted column {}", column_id);

    Ok(Json(DeleteResponse {
        deleted_id: column_id.to_string(),
    }))
}

/// GET /api/v1/columns/light
pub async fn list_columns_light(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<ColumnLightListResponse>> {
    let columns = ColumnRepository::find_visible(&state.pool, user.id()).await?;

    Ok(Json(ColumnLightListResponse {
        columns: columns.into_iter().map(ColumnLightDto::from).collect(),
    }))
}

/// GET /api/v1/columns/board_columns?board_id=
pub async fn board_columns(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<BoardIdQuery>,
) -> ApiResult<Json<ColumnListResponse>> {
    let board_id = required_id(query.board_id.as_deref(), "Board ID is required.")?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Board(board_id),
        AccessPolicy::MemberOrCreator,
        "view columns in this board",
    )
    .await?;

    let columns = ColumnRepository::find_by_board(&state.pool, board_id).await?;

    Ok(Json(ColumnListResponse {
        columns: hierarchy::column_dtos(&state.pool, columns).await?,
    }))
}

/// POST /api/v1/columns/reorder
///
/// `column_order[i]` gets position `i`. Every id must belong to the board;
/// otherwise nothing changes.
pub async fn reorder_columns(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<ReorderColumnsRequest>,
) -> ApiResult<Json<DetailResponse>> {
    let board_id = required_id(req.board_id.as_deref(), REORDER_FIELDS_REQUIRED)?;
    let order = match req.column_order {
        Some(order) if !order.is_empty() => order
            .iter()
            .map(|id| parse_id(id))
            .collect::<ApiResult<Vec<Uuid>>>()?,
        _ => return Err(ApiError::bad_request(REORDER_FIELDS_REQUIRED)),
    };

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Board(board_id),
        AccessPolicy::MemberOrCreator,
        "reorder columns in this board",
    )
    .await?;

    let mut tx = begin_write(&state.pool).await?;
    ColumnRepository::reorder(&mut tx, board_id, &order).await?;
    tx.commit().await?;

    log::info!("Reordered {} columns in board {}", order.len(), board_id);

    Ok(Json(DetailResponse::new("Columns reordered successfully.")))
}

fn column_not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Column not found for id {id}."))
}
