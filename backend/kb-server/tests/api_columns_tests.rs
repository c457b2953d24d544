mod common;

use common::{
    DEFAULT_USER, board_column_ids, create_project, create_task, create_test_app,
    create_test_user, send,
};

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

fn default_user() -> Uuid {
    Uuid::parse_str(DEFAULT_USER).unwrap()
}

#[tokio::test]
async fn test_create_column_appends_by_default() {
    // Given
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;

    // When
    let (status, json) = send(
        &app,
        "POST",
        "/api/v1/columns",
        default_user(),
        Some(json!({ "board_id": project.board_id, "name": "Review", "wip_limit": 3 })),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["column"]["position"], 3);
    assert_eq!(json["column"]["wip_limit"], 3);
    assert_eq!(json["column"]["board_id"], project.board_id);
    assert_eq!(json["column"]["tasks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_column_at_position_shifts_siblings() {
    // Given
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;

    // When
    let (status, json) = send(
        &app,
        "POST",
        "/api/v1/columns",
        default_user(),
        Some(json!({ "board_id": project.board_id, "name": "Inbox", "position": 0 })),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::CREATED);
    let inbox = json["column"]["id"].as_str().unwrap().to_string();
    let order = board_column_ids(&app, default_user(), &project.board_id).await;

    let mut expected = vec![inbox];
    expected.extend(project.columns.iter().cloned());
    assert_eq!(order, expected);
}

#[tokio::test]
async fn test_create_column_rejects_non_positive_wip_limit() {
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/v1/columns",
        default_user(),
        Some(json!({ "board_id": project.board_id, "name": "Busy", "wip_limit": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "wip_limit");
}

#[tokio::test]
async fn test_update_column_clears_wip_limit_with_null() {
    // Given
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;
    let uri = format!("/api/v1/columns/{}", project.columns[1]);
    let (status, _) = send(&app, "PATCH", &uri, default_user(), Some(json!({ "wip_limit": 2 }))).await;
    assert_eq!(status, StatusCode::OK);

    // When
    let (status, json) = send(
        &app,
        "PATCH",
        &uri,
        default_user(),
        Some(json!({ "wip_limit": null, "name": "Doing" })),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["column"]["name"], "Doing");
    assert!(json["column"]["wip_limit"].is_null());
    assert_eq!(json["column"]["position"], 1);
}

#[tokio::test]
async fn test_reorder_columns() {
    // Given
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;
    let reversed: Vec<String> = project.columns.iter().rev().cloned().collect();

    // When
    let (status, json) = send(
        &app,
        "POST",
        "/api/v1/columns/reorder",
        default_user(),
        Some(json!({ "board_id": project.board_id, "column_order": reversed })),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["detail"], "Columns reordered successfully.");
    assert_eq!(
        board_column_ids(&app, default_user(), &project.board_id).await,
        reversed
    );
}

#[tokio::test]
async fn test_reorder_columns_with_foreign_column_changes_nothing() {
    // Given
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;
    let other = create_project(&app, default_user(), "Other").await;
    let order = vec![
        project.columns[2].clone(),
        project.columns[1].clone(),
        other.columns[0].clone(),
    ];

    // When
    let (status, json) = send(
        &app,
        "POST",
        "/api/v1/columns/reorder",
        default_user(),
        Some(json!({ "board_id": project.board_id, "column_order": order })),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["error"]["message"],
        format!("Column not found for id {}.", other.columns[0])
    );
    assert_eq!(
        board_column_ids(&app, default_user(), &project.board_id).await,
        project.columns
    );
}

#[tokio::test]
async fn test_reorder_columns_by_stranger_is_forbidden() {
    // Given
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;
    let stranger = create_test_user(app.pool(), "mallory").await;
    let reversed: Vec<String> = project.columns.iter().rev().cloned().collect();

    // When
    let (status, json) = send(
        &app,
        "POST",
        "/api/v1/columns/reorder",
        stranger,
        Some(json!({ "board_id": project.board_id, "column_order": reversed })),
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(
        board_column_ids(&app, default_user(), &project.board_id).await,
        project.columns
    );
}

#[tokio::test]
async fn test_get_unknown_column_names_the_id() {
    let app = create_test_app().await;
    let missing = Uuid::new_v4();

    let (status, json) = send(
        &app,
        "GET",
        &format!("/api/v1/columns/{missing}"),
        default_user(),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["error"]["message"],
        format!("Column not found for id {missing}.")
    );
}

#[tokio::test]
async fn test_reorder_columns_requires_fields() {
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/v1/columns/reorder",
        default_user(),
        Some(json!({ "board_id": project.board_id, "column_order": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"]["message"],
        "Board ID and column order are required."
    );
}

#[tokio::test]
async fn test_delete_column_compacts_board_and_removes_tasks() {
    // Given
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;
    let task_id = create_task(&app, default_user(), &project.columns[0], "Doomed").await;

    // When
    let (status, json) = send(
        &app,
        "DELETE",
        &format!("/api/v1/columns/{}", project.columns[0]),
        default_user(),
        None,
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["deleted_id"], project.columns[0]);
    assert_eq!(
        board_column_ids(&app, default_user(), &project.board_id).await,
        project.columns[1..].to_vec()
    );

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/v1/tasks/{}", task_id),
        default_user(),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_board_columns_requires_board_id() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app,
        "GET",
        "/api/v1/columns/board_columns",
        default_user(),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["message"], "Board ID is required.");
}

#[tokio::test]
async fn test_light_columns_have_no_tasks() {
    let app = create_test_app().await;
    let project = create_project(&app, default_user(), "Board").await;
    create_task(&app, default_user(), &project.columns[0], "Task").await;

    let (status, json) = send(&app, "GET", "/api/v1/columns/light", default_user(), None).await;

    assert_eq!(status, StatusCode::OK);
    let columns = json["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(|c| c.get("tasks").is_none()));
}
