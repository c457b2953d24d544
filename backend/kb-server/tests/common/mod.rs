#![allow(dead_code)]

//! Test infrastructure for kb-server API tests

use kb_server::{AppState, FsBlobStore, build_router};

use kb_auth::{AuthProvider, Principal};
use kb_config::ValidationConfig;
use kb_core::User;
use kb_db::UserRepository;

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const DEFAULT_USER: &str = "00000000-0000-0000-0000-000000000001";

/// Router plus the state behind it. The temp dir holds the blob store.
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub fn pool(&self) -> &SqlitePool {
        &self.state.pool
    }
}

/// Create AppState for testing
pub async fn create_test_app_state(auth: Option<Arc<dyn AuthProvider>>) -> (AppState, TempDir) {
    let pool = kb_db::open_in_memory()
        .await
        .expect("Failed to create test database");
    let dir = TempDir::new().expect("Failed to create temp dir");
    let blobs = FsBlobStore::open(dir.path().join("blobs"))
        .await
        .expect("Failed to open blob store");

    let state = AppState::new(
        pool,
        auth,
        Arc::new(blobs),
        Principal::new(Uuid::parse_str(DEFAULT_USER).unwrap(), "local"),
        ValidationConfig::default(),
    );
    (state, dir)
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_auth(None).await
}

pub async fn create_test_app_with_auth(auth: Option<Arc<dyn AuthProvider>>) -> TestApp {
    let (state, dir) = create_test_app_state(auth).await;
    let router = build_router(state.clone());
    TestApp { state, router, dir }
}

/// Create a test user
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> Uuid {
    let user = User::new(Uuid::new_v4(), username.to_string());
    UserRepository::ensure(pool, &user)
        .await
        .expect("Failed to create test user");
    user.id
}

/// Send a request as `user` and return status, headers and raw body.
pub async fn send_raw(
    app: &TestApp,
    method: &str,
    uri: &str,
    user: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("X-User-Id", user.to_string());
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes)
}

/// Send a request as `user` and parse the JSON response.
pub async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    user: Uuid,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, _headers, bytes) = send_raw(app, method, uri, Some(user), body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// A project as seen through the API, with its seeded main board.
pub struct SeededProject {
    pub id: String,
    pub board_id: String,
    /// Column ids of the main board in position order
    pub columns: Vec<String>,
}

/// Create a project through the API. It comes with a "Main Board" holding
/// To Do / In Progress / Done.
pub async fn create_project(app: &TestApp, user: Uuid, name: &str) -> SeededProject {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/projects",
        user,
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create project: {json}");

    let project = &json["project"];
    let board = &project["boards"][0];
    SeededProject {
        id: project["id"].as_str().unwrap().to_string(),
        board_id: board["id"].as_str().unwrap().to_string(),
        columns: board["columns"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect(),
    }
}

pub async fn add_member(app: &TestApp, creator: Uuid, project_id: &str, member: Uuid) {
    let (status, json) = send(
        app,
        "POST",
        &format!("/api/v1/projects/{}/add_member", project_id),
        creator,
        Some(serde_json::json!({ "user_id": member.to_string() })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "add member: {json}");
}

/// Create a task through the API and return its id.
pub async fn create_task(app: &TestApp, user: Uuid, column_id: &str, title: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/tasks",
        user,
        Some(serde_json::json!({ "column_id": column_id, "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create task: {json}");
    json["task"]["id"].as_str().unwrap().to_string()
}

/// Task ids of a column in position order.
pub async fn column_task_ids(app: &TestApp, user: Uuid, column_id: &str) -> Vec<String> {
    let (status, json) = send(
        app,
        "GET",
        &format!("/api/v1/tasks/column_tasks?column_id={}", column_id),
        user,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "column tasks: {json}");

    let tasks = json["tasks"].as_array().unwrap();
    for (index, task) in tasks.iter().enumerate() {
        assert_eq!(task["position"], index as i64, "positions must be dense");
    }
    tasks
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect()
}

/// Column ids of a board in position order.
pub async fn board_column_ids(app: &TestApp, user: Uuid, board_id: &str) -> Vec<String> {
    let (status, json) = send(
        app,
        "GET",
        &format!("/api/v1/columns/board_columns?board_id={}", board_id),
        user,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "board columns: {json}");

    let columns = json["columns"].as_array().unwrap();
    for (index, column) in columns.iter().enumerate() {
        assert_eq!(column["position"], index as i64, "positions must be dense");
    }
    columns
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}
