mod common;

use common::{
    column_positions, create_test_pool, create_test_user, positions, seed_board, seed_columns,
    seed_project,
};

use kb_core::Column;
use kb_core::position::is_dense;
use kb_db::{ColumnRepository, DbError};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_board_with_columns_when_inserting_without_position_then_appends() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    seed_columns(&pool, board.id, 3).await;

    // When
    let column = Column::new(board.id, "Archive".to_string(), 0);
    let mut conn = pool.acquire().await.unwrap();
    let position = ColumnRepository::insert_at(&mut conn, &column, None).await.unwrap();
    drop(conn);

    // Then
    assert_that!(position, eq(3));
    let rows = column_positions(&pool, board.id).await;
    assert_that!(positions(&rows), eq(&vec![0, 1, 2, 3]));
    assert_that!(rows[3].0, eq(column.id));
}

#[tokio::test]
async fn given_empty_board_when_inserting_then_position_is_zero() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;

    // When
    let column = Column::new(board.id, "First".to_string(), 7);
    let mut conn = pool.acquire().await.unwrap();
    let position = ColumnRepository::insert_at(&mut conn, &column, None).await.unwrap();

    // Then
    assert_that!(position, eq(0));
}

#[tokio::test]
async fn given_board_when_inserting_at_explicit_position_then_siblings_shift() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    let existing = seed_columns(&pool, board.id, 3).await;

    // When
    let column = Column::new(board.id, "Wedge".to_string(), 0);
    let mut conn = pool.acquire().await.unwrap();
    let position = ColumnRepository::insert_at(&mut conn, &column, Some(1)).await.unwrap();
    drop(conn);

    // Then
    assert_that!(position, eq(1));
    let ids: Vec<Uuid> = column_positions(&pool, board.id)
        .await
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_that!(
        ids,
        eq(&vec![existing[0].id, column.id, existing[1].id, existing[2].id])
    );
}

#[tokio::test]
async fn given_board_when_inserting_past_the_end_then_position_is_clamped() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    seed_columns(&pool, board.id, 2).await;

    // When
    let column = Column::new(board.id, "Far".to_string(), 0);
    let mut conn = pool.acquire().await.unwrap();
    let position = ColumnRepository::insert_at(&mut conn, &column, Some(99)).await.unwrap();
    drop(conn);

    // Then
    assert_that!(position, eq(2));
    assert!(is_dense(&positions(&column_positions(&pool, board.id).await)));
}

#[tokio::test]
async fn given_three_columns_when_reordered_then_positions_follow_list() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    let cols = seed_columns(&pool, board.id, 3).await;

    // When
    let order = vec![cols[2].id, cols[0].id, cols[1].id];
    let mut tx = pool.begin().await.unwrap();
    ColumnRepository::reorder(&mut tx, board.id, &order).await.unwrap();
    tx.commit().await.unwrap();

    // Then
    let rows = column_positions(&pool, board.id).await;
    assert_that!(
        rows,
        eq(&vec![(cols[2].id, 0), (cols[0].id, 1), (cols[1].id, 2)])
    );
}

#[tokio::test]
async fn given_unknown_column_mid_list_when_reordered_then_nothing_changes() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    let cols = seed_columns(&pool, board.id, 3).await;
    let before = column_positions(&pool, board.id).await;

    // When
    let order = vec![cols[2].id, Uuid::new_v4(), cols[0].id];
    let mut tx = pool.begin().await.unwrap();
    let result = ColumnRepository::reorder(&mut tx, board.id, &order).await;
    drop(tx);

    // Then
    assert!(matches!(result, Err(DbError::NotFound { entity: "Column", .. })));
    assert_that!(column_positions(&pool, board.id).await, eq(&before));
}

#[tokio::test]
async fn given_column_of_another_board_when_reordered_then_not_found() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    let other = seed_board(&pool, project.id).await;
    let cols = seed_columns(&pool, board.id, 2).await;
    let foreign = seed_columns(&pool, other.id, 1).await;

    // When
    let order = vec![cols[1].id, foreign[0].id];
    let mut tx = pool.begin().await.unwrap();
    let result = ColumnRepository::reorder(&mut tx, board.id, &order).await;
    drop(tx);

    // Then
    assert!(matches!(result, Err(DbError::NotFound { .. })));
    assert_that!(
        positions(&column_positions(&pool, other.id).await),
        eq(&vec![0])
    );
}

#[tokio::test]
async fn given_partial_order_when_reordered_then_board_stays_dense() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    let cols = seed_columns(&pool, board.id, 4).await;

    // When: only the last column is listed, so it claims slot 0
    let mut tx = pool.begin().await.unwrap();
    ColumnRepository::reorder(&mut tx, board.id, &[cols[3].id]).await.unwrap();
    tx.commit().await.unwrap();

    // Then
    let rows = column_positions(&pool, board.id).await;
    assert_that!(positions(&rows), eq(&vec![0, 1, 2, 3]));
    assert_that!(rows[0].0, eq(cols[3].id));
    assert_that!(rows[1].0, eq(cols[0].id));
}

#[tokio::test]
async fn given_duplicate_ids_when_reordered_then_last_index_wins_and_board_is_dense() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    let cols = seed_columns(&pool, board.id, 3).await;

    // When
    let order = vec![cols[0].id, cols[1].id, cols[2].id, cols[0].id];
    let mut tx = pool.begin().await.unwrap();
    ColumnRepository::reorder(&mut tx, board.id, &order).await.unwrap();
    tx.commit().await.unwrap();

    // Then
    let rows = column_positions(&pool, board.id).await;
    assert_that!(
        rows,
        eq(&vec![(cols[1].id, 0), (cols[2].id, 1), (cols[0].id, 2)])
    );
}

#[tokio::test]
async fn given_column_when_updated_then_position_is_untouched() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    let cols = seed_columns(&pool, board.id, 2).await;

    // When
    let mut column = cols[1].clone();
    column.name = "Shipped".to_string();
    column.wip_limit = Some(4);
    column.position = 0;
    ColumnRepository::update(&pool, &column).await.unwrap();

    // Then
    let found = ColumnRepository::find_by_id(&pool, column.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.name, eq("Shipped"));
    assert_that!(found.wip_limit, some(eq(4)));
    assert_that!(found.position, eq(1));
}
