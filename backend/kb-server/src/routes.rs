use crate::api::{
    attachments::attachments, boards::boards, columns::columns, comments::comments,
    projects::projects, subtasks::subtasks, tags::tags, tasks::tasks,
};
use crate::{AppState, health};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Base64 inflates uploads by a third; leave room for a 100 MB file plus
/// the JSON envelope.
const MAX_REQUEST_BODY_BYTES: usize = 140 * 1024 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // REST API
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Projects
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/projects/light", get(projects::list_projects_light))
        .route(
            "/projects/create_from_template",
            post(projects::create_from_template),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/projects/{id}/add_member", post(projects::add_member))
        .route("/projects/{id}/remove_member", post(projects::remove_member))
        .route("/projects/{id}/archive", post(projects::archive_project))
        .route("/projects/{id}/unarchive", post(projects::unarchive_project))
        .route(
            "/projects/{id}/create_board_from_template",
            post(projects::create_board_from_template),
        )
        // Boards
        .route("/boards", get(boards::list_boards).post(boards::create_board))
        .route("/boards/light", get(boards::list_boards_light))
        .route("/boards/project_boards", get(boards::project_boards))
        .route(
            "/boards/{id}",
            get(boards::get_board)
                .patch(boards::update_board)
                .delete(boards::delete_board),
        )
        // Columns
        .route(
            "/columns",
            get(columns::list_columns).post(columns::create_column),
        )
        .route("/columns/light", get(columns::list_columns_light))
        .route("/columns/board_columns", get(columns::board_columns))
        .route("/columns/reorder", post(columns::reorder_columns))
        .route(
            "/columns/{id}",
            get(columns::get_column)
                .patch(columns::update_column)
                .delete(columns::delete_column),
        )
        // Tasks
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route("/tasks/light", get(tasks::list_tasks_light))
        .route("/tasks/column_tasks", get(tasks::column_tasks))
        .route("/tasks/reorder", post(tasks::reorder_tasks))
        .route("/tasks/my_tasks", get(tasks::my_tasks))
        .route("/tasks/date_filter", get(tasks::date_filter))
        .route("/tasks/filter_by_tags", get(tasks::filter_by_tags))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .patch(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/tasks/{id}/assign", post(tasks::assign_task))
        // Subtasks
        .route(
            "/subtasks",
            get(subtasks::list_subtasks).post(subtasks::create_subtask),
        )
        .route("/subtasks/task_subtasks", get(subtasks::task_subtasks))
        .route(
            "/subtasks/{id}",
            get(subtasks::get_subtask)
                .patch(subtasks::update_subtask)
                .delete(subtasks::delete_subtask),
        )
        // Tags
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/tags/{id}",
            get(tags::get_tag)
                .patch(tags::update_tag)
                .delete(tags::delete_tag),
        )
        .route("/tags/{id}/add_to_task", post(tags::add_to_task))
        .route("/tags/{id}/remove_from_task", post(tags::remove_from_task))
        // Comments
        .route(
            "/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/comments/task_comments", get(comments::task_comments))
        .route(
            "/comments/{id}",
            get(comments::get_comment)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
        // Attachments
        .route(
            "/attachments",
            get(attachments::list_attachments).post(attachments::create_attachment),
        )
        .route(
            "/attachments/task_attachments",
            get(attachments::task_attachments),
        )
        .route(
            "/attachments/{id}",
            get(attachments::get_attachment)
                .patch(attachments::update_attachment)
                .delete(attachments::delete_attachment),
        )
        .route(
            "/attachments/{id}/content",
            get(attachments::download_attachment),
        )
}
