//! Project REST API handlers
//!
//! A project is visible to its creator and its members. Membership removal
//! and archival are reserved for the creator.

use crate::api::params::{parse_id, required_id};
use crate::api::{guard, hierarchy};
use crate::storage;
use crate::{
    ApiError, ApiJson, ApiResult, AppState, BoardResponse, CreateBoardFromTemplateRequest,
    CreateFromTemplateRequest, CreateProjectRequest, CurrentUser, DeleteResponse, DetailResponse,
    MemberRequest, ProjectLightDto, ProjectLightListResponse, ProjectListResponse,
    ProjectResponse, UpdateProjectRequest,
};

use kb_core::validation::validate_name;
use kb_core::{
    AccessPolicy, Board, BoardTemplate, Column, EntityRef, Project, ProjectMember, User,
};
use kb_db::{
    BoardRepository, ColumnRepository, ProjectMemberRepository, ProjectRepository, UserRepository,
    begin_write, cascade,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sqlx::SqliteConnection;
use uuid::Uuid;

const MAIN_BOARD_NAME: &str = "Main Board";
const DEFAULT_TEMPLATE_BOARD_NAME: &str = "New Board";

/// Insert `board` and the template's columns in template order.
async fn seed_board(
    conn: &mut SqliteConnection,
    board: &Board,
    template: BoardTemplate,
) -> ApiResult<()> {
    BoardRepository::create(&mut *conn, board).await?;

    for template_column in template.columns() {
        let column = Column::new(
            board.id,
            template_column.name.to_string(),
            template_column.position,
        )
        .with_color(template_column.color);
        ColumnRepository::create(&mut *conn, &column).await?;
    }

    Ok(())
}

/// Project row, main board and template columns in one transaction.
async fn create_with_template(
    state: &AppState,
    project: &Project,
    template: BoardTemplate,
) -> ApiResult<()> {
    let board = Board::new(project.id, MAIN_BOARD_NAME.to_string(), String::new());

    let mut tx = begin_write(&state.pool).await?;
    ProjectRepository::create(&mut *tx, project).await?;
    seed_board(&mut tx, &board, template).await?;
    tx.commit().await?;

    Ok(())
}

async fn find_user(state: &AppState, user_id: Uuid) -> ApiResult<User> {
    UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))
}

async fn find_visible_project(state: &AppState, id: Uuid, principal: Uuid) -> ApiResult<Project> {
    ProjectRepository::find_visible_by_id(&state.pool, id, principal)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found."))
}

/// GET /api/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<ProjectListResponse>> {
    let projects = ProjectRepository::find_visible(&state.pool, user.id()).await?;

    Ok(Json(ProjectListResponse {
        projects: hierarchy::project_dtos(&state.pool, projects).await?,
    }))
}

/// POST /api/v1/projects
///
/// Every new project starts with a "Main Board" holding the simple column set.
pub async fn create_project(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let name = validate_name(
        "name",
        "Project name",
        &req.name,
        state.validation.max_name_length,
    )?;

    let project = Project::new(name, req.description, user.id());
    create_with_template(&state, &project, BoardTemplate::Simple).await?;

    log::info!("Created project {} for user {}", project.id, user.id());

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            project: hierarchy::project_dto(&state.pool, project).await?,
        }),
    ))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = find_visible_project(&state, parse_id(&id)?, user.id()).await?;

    Ok(Json(ProjectResponse {
        project: hierarchy::project_dto(&state.pool, project).await?,
    }))
}

/// PATCH /api/v1/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Project(project_id),
        AccessPolicy::MemberOrCreator,
        "update this project",
    )
    .await?;

    let mut project = find_visible_project(&state, project_id, user.id()).await?;

    if let Some(name) = req.name {
        project.name = validate_name(
            "name",
            "Project name",
            &name,
            state.validation.max_name_length,
        )?;
    }
    if let Some(description) = req.description {
        project.description = description;
    }
    project.updated_at = Utc::now();

    ProjectRepository::update(&state.pool, &project).await?;

    log::info!("Updated project {}", project.id);

    Ok(Json(ProjectResponse {
        project: hierarchy::project_dto(&state.pool, project).await?,
    }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Project(project_id),
        AccessPolicy::MemberOrCreator,
        "delete this project",
    )
    .await?;

    let mut tx = begin_write(&state.pool).await?;
    let file_keys = cascade::delete_project(&mut tx, project_id).await?;
    tx.commit().await?;

    storage::discard(state.blobs.as_ref(), &file_keys).await;

    log::info!("Deleted project {}", project_id);

    Ok(Json(DeleteResponse {
        deleted_id: project_id.to_string(),
    }))
}

/// POST /api/v1/projects/{id}/add_member
pub async fn add_member(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<MemberRequest>,
) -> ApiResult<Json<DetailResponse>> {
    let project_id = parse_id(&id)?;

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Project(project_id),
        AccessPolicy::MemberOrCreator,
        "add members to this project",
    )
    .await?;

    let member_id = required_id(req.user_id.as_deref(), "User ID is required.")?;
    let member = find_user(&state, member_id).await?;

    let added =
        ProjectMemberRepository::add(&state.pool, &ProjectMember::new(project_id, member.id))
            .await?;
    if added {
        log::info!("Added user {} to project {}", member.id, project_id);
    }

    Ok(Json(DetailResponse::new(format!(
        "User {} added to project.",
        member.username
    ))))
}

/// POST /api/v1/projects/{id}/remove_member
///
/// The creator can never be removed, not even by themselves.
pub async fn remove_member(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<MemberRequest>,
) -> ApiResult<Json<DetailResponse>> {
    let project_id = parse_id(&id)?;

    let access = guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Project(project_id),
        AccessPolicy::CreatorOnly,
        "remove members",
    )
    .await?;

    let member_id = required_id(req.user_id.as_deref(), "User ID is required.")?;
    let member = find_user(&state, member_id).await?;

    if member.id == access.created_by {
        return Err(ApiError::bad_request("Cannot remove the project creator."));
    }

    let removed = ProjectMemberRepository::remove(&state.pool, project_id, member.id).await?;
    if removed {
        log::info!("Removed user {} from project {}", member.id, project_id);
    }

    Ok(Json(DetailResponse::new(format!(
        "User {} removed from project.",
        member.username
    ))))
}

async fn set_archived(
    state: &AppState,
    user: &CurrentUser,
    id: &str,
    archived: bool,
) -> ApiResult<Uuid> {
    let project_id = parse_id(id)?;
    let action = if archived {
        "archive the project"
    } else {
        "unarchive the project"
    };

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Project(project_id),
        AccessPolicy::CreatorOnly,
        action,
    )
    .await?;

    ProjectRepository::set_archived(&state.pool, project_id, archived, Utc::now()).await?;

    Ok(project_id)
}

/// POST /api/v1/projects/{id}/archive
pub async fn archive_project(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DetailResponse>> {
    let project_id = set_archived(&state, &user, &id, true).await?;

    log::info!("Archived project {}", project_id);

    Ok(Json(DetailResponse::new("Project archived successfully.")))
}

/// POST /api/v1/projects/{id}/unarchive
pub async fn unarchive_project(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DetailResponse>> {
    let project_id = set_archived(&state, &user, &id, false).await?;

    log::info!("Unarchived project {}", project_id);

    Ok(Json(DetailResponse::new("Project unarchived successfully.")))
}

/// GET /api/v1/projects/light
pub async fn list_projects_light(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<ProjectLightListResponse>> {
    let projects = ProjectRepository::find_visible(&state.pool, user.id()).await?;

    Ok(Json(ProjectLightListResponse {
        projects: projects.into_iter().map(ProjectLightDto::from).collect(),
    }))
}

/// POST /api/v1/projects/create_from_template
///
/// Unknown template keys fall back to the simple column set.
pub async fn create_from_template(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<CreateFromTemplateRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let template_type = req
        .template_type
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty());
    let name = req.name.as_deref().filter(|v| !v.trim().is_empty());
    let (Some(template_type), Some(name)) = (template_type, name) else {
        return Err(ApiError::bad_request(
            "Template type and name are required.",
        ));
    };

    let name = validate_name("name", "Project name", name, state.validation.max_name_length)?;
    let template = BoardTemplate::from_key(Some(template_type));

    let project = Project::new(name, req.description, user.id());
    create_with_template(&state, &project, template).await?;

    log::info!(
        "Created project {} from template {} for user {}",
        project.id,
        template,
        user.id()
    );

    Ok(Json(ProjectResponse {
        project: hierarchy::project_dto(&state.pool, project).await?,
    }))
}

/// POST /api/v1/projects/{id}/create_board_from_template
pub async fn create_board_from_template(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<CreateBoardFromTemplateRequest>,
) -> ApiResult<Json<BoardResponse>> {
    let project_id = parse_id(&id)?;

    let Some(template_type) = req
        .template_type
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    else {
        return Err(ApiError::bad_request("Template type is required."));
    };

    guard::authorize(
        &state.pool,
        user.id(),
        EntityRef::Project(project_id),
        AccessPolicy::MemberOrCreator,
        "create boards in this project",
    )
    .await?;

    let name = validate_name(
        "name",
        "Board name",
        req.name.as_deref().unwrap_or(DEFAULT_TEMPLATE_BOARD_NAME),
        state.validation.max_name_length,
    )?;
    let template = BoardTemplate::from_key(Some(template_type));
    let board = Board::new(project_id, name, String::new());

    let mut tx = begin_write(&state.pool).await?;
    seed_board(&mut tx, &board, template).await?;
    tx.commit().await?;

    log::info!(
        "Created board {} from template {} in project {}",
        board.id,
        template,
        project_id
    );

    Ok(Json(BoardResponse {
        board: hierarchy::board_dto(&state.pool, board).await?,
    }))
}
