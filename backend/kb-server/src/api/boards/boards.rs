//! Board REST API handlers

use crate::api::params::{parse_id, required_id};
use crate::api::{guard, hierarchy};
use crate::storage;
use crate::{
    ApiError, ApiJson, ApiResult, AppState, BoardLightDto, BoardLightListResponse,
    BoardListResponse, BoardResponse, CreateBoardRequest, CurrentUser, DeleteResponse,
    ProjectIdQuery, UpdateBoardRequest,
};

use kb_core::validation::validate_name;
use kb_core::{AccessPolicy, Board, EntityRef};
use kb_db::{BoardRepository, begin_write, cascade};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

/// GET /api/v1/boards
pub async fn list_boards(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<BoardListResponse>> {
    let boards = BoardRepository::find_visible(&state.pool, user.id()).await?;

    Ok(Json(BoardListResponse {
        boards: hierarchy::board_dtos(&state.pool, boards).await?,
    }))
}

/// POST /api/v1/boards
///
/// Creates an empty board. Use the project's `create_board_from_template`
/// action to get starter columns.
pub async fn create_board(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CreateBoardRequest>,
) -> ApiResult<(StatusCode, Json<BoardResponse>)> {
    let project_id = required_id(req.project_id.as_deref(), "Project ID is required.")?;
    let name = validate_name(
        "name",
        "Board name",
        &req.name,
        state.validation.max_name_length,
    )?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Project(project_id),
        AccessPolicy::MemberOrCreator,
        "create boards in this project",
    )
    .await?;

    let board = Board::new(project_id, name, req.description);
    BoardRepository::create(&state.pool, &board).await?;

    log::info!("Created board {} in project {}", board.id, project_id);

    Ok((
        StatusCode::CREATED,
        Json(BoardResponse {
            board: hierarchy::board_dto(&state.pool, board).await?,
        }),
    ))
}

/// GET /api/v1/boards/{id}
pub async fn get_board(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<BoardResponse>> {
    let board = BoardRepository::find_visible_by_id(&state.pool, parse_id(&id)?, user.id())
        .await?
        .ok_or_else(|| ApiError::not_found("Board not found."))?;

    Ok(Json(BoardResponse {
        board: hierarchy::board_dto(&state.pool, board).await?,
    }))
}

/// PATCH /api/v1/boards/{id}
pub async fn update_board(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateBoardRequest>,
) -> ApiResult<Json<BoardResponse>> {
    let board_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Board(board_id),
        AccessPolicy::MemberOrCreator,
        "update this board",
    )
    .await?;

    let mut board = BoardRepository::find_visible_by_id(&state.pool, board_id, user.id())
        .await?
        .ok_or_else(|| ApiError::not_found("Board not found."))?;

    if let Some(name) = req.name {
        board.name = validate_name(
            "name",
            "Board name",
            &name,
            state.validation.max_name_length,
        )?;
    }
    if let Some(description) = req.description {
        board.description = description;
    }

    BoardRepository::update(&state.pool, &board).await?;

    log::info!("Updated board {}", board.id);

    Ok(Json(BoardResponse {
        board: hierarchy::board_dto(&state.pool, board).await?,
    }))
}

/// DELETE /api/v1/boards/{id}
pub async fn delete_board(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let board_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Board(board_id),
        AccessPolicy::MemberOrCreator,
        "delete this board",
    )
    .await?;

    let mut tx = begin_write(&state.pool).await?;
    let file_keys = cascade::delete_board(&mut tx, board_id).await?;
    tx.commit().await?;

    storage::discard(state.blobs.as_ref(), &file_keys).await;

    log::info!("Deleted board {}", board_id);

    Ok(Json(DeleteResponse {
        deleted_id: board_id.to_string(),
    }))
}

/// GET /api/v1/boards/light
pub async fn list_boards_light(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<BoardLightListResponse>> {
    let boards = BoardRepository::find_visible(&state.pool, user.id()).await?;

    Ok(Json(BoardLightListResponse {
        boards: boards.into_iter().map(BoardLightDto::from).collect(),
    }))
}

/// GET /api/v1/boards/project_boards?project_id=
pub async fn project_boards(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ProjectIdQuery>,
) -> ApiResult<Json<BoardListResponse>> {
    let project_id = required_id(query.project_id.as_deref(), "Project ID is required.")?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Project(project_id),
        AccessPolicy::MemberOrCreator,
        "view boards in this project",
    )
    .await?;

    let boards = BoardRepository::find_by_project(&state.pool, project_id).await?;

    Ok(Json(BoardListResponse {
        boards: hierarchy::board_dtos(&state.pool, boards).await?,
    }))
}
