mod common;

use common::{
    create_test_pool, create_test_user, seed_board, seed_columns, seed_member, seed_project,
    seed_tasks,
};

use kb_core::{AccessPolicy, Comment, EntityRef, SubTask};
use kb_db::{AccessRepository, CommentRepository, SubTaskRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_subtask_when_resolving_access_then_walks_up_to_project() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    let cols = seed_columns(&pool, board.id, 1).await;
    let tasks = seed_tasks(&pool, cols[0].id, owner, 1).await;
    let subtask = SubTask::new(tasks[0].id, "Check".to_string());
    SubTaskRepository::create(&pool, &subtask).await.unwrap();

    // When
    let access = AccessRepository::project_access(&pool, EntityRef::SubTask(subtask.id), owner)
        .await
        .unwrap();

    // Then
    assert_that!(access, some(anything()));
    let access = access.unwrap();
    assert_that!(access.project_id, eq(project.id));
    assert_that!(access.is_creator(), eq(true));
    assert_that!(access.is_member, eq(false));
}

#[tokio::test]
async fn given_member_and_outsider_when_resolving_comment_access_then_policies_differ() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let member = create_test_user(&pool, "member").await;
    let outsider = create_test_user(&pool, "outsider").await;
    let project = seed_project(&pool, owner).await;
    seed_member(&pool, project.id, member).await;
    let board = seed_board(&pool, project.id).await;
    let cols = seed_columns(&pool, board.id, 1).await;
    let tasks = seed_tasks(&pool, cols[0].id, owner, 1).await;
    let comment = Comment::new(tasks[0].id, owner, "Nice".to_string());
    CommentRepository::create(&pool, &comment).await.unwrap();
    let entity = EntityRef::Comment(comment.id);

    // When
    let as_member = AccessRepository::project_access(&pool, entity, member)
        .await
        .unwrap()
        .unwrap();
    let as_outsider = AccessRepository::project_access(&pool, entity, outsider)
        .await
        .unwrap()
        .unwrap();

    // Then
    assert_that!(AccessPolicy::MemberOrCreator.permits(&as_member), eq(true));
    assert_that!(AccessPolicy::CreatorOnly.permits(&as_member), eq(false));
    assert_that!(AccessPolicy::MemberOrCreator.permits(&as_outsider), eq(false));
}

#[tokio::test]
async fn given_missing_entity_when_resolving_access_then_none() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;

    // When
    let access = AccessRepository::project_access(&pool, EntityRef::Board(Uuid::new_v4()), owner)
        .await
        .unwrap();

    // Then
    assert_that!(access, none());
}

#[tokio::test]
async fn given_every_entity_kind_when_resolving_then_same_project() {
    // Given
    let pool = create_test_pool().await;
    let owner = create_test_user(&pool, "owner").await;
    let project = seed_project(&pool, owner).await;
    let board = seed_board(&pool, project.id).await;
    let cols = seed_columns(&pool, board.id, 1).await;
    let tasks = seed_tasks(&pool, cols[0].id, owner, 1).await;

    // When / Then
    for entity in [
        EntityRef::Project(project.id),
        EntityRef::Board(board.id),
        EntityRef::Column(cols[0].id),
        EntityRef::Task(tasks[0].id),
    ] {
        let access = AccessRepository::project_access(&pool, entity, owner)
            .await
            .unwrap()
            .unwrap();
        assert_that!(access.project_id, eq(project.id));
    }
}
