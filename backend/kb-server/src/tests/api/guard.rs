use crate::ApiError;
use crate::api::guard::{authorize, denied_message};
use crate::tests::create_test_state;

use kb_core::{AccessPolicy, EntityRef, Project, ProjectMember, User};
use kb_db::{ProjectMemberRepository, ProjectRepository, UserRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

async fn create_user(pool: &SqlitePool, name: &str) -> Uuid {
    let user = User::new(Uuid::new_v4(), name.to_string());
    UserRepository::ensure(pool, &user).await.unwrap();
    user.id
}

#[test]
fn test_denied_message_names_the_creator_for_creator_only() {
    assert_eq!(
        denied_message(AccessPolicy::CreatorOnly, "archive the project"),
        "Only the project creator can archive the project."
    );
    assert_eq!(
        denied_message(AccessPolicy::MemberOrCreator, "create boards in this project"),
        "You do not have permission to create boards in this project."
    );
}

#[tokio::test]
async fn test_authorize_distinguishes_creator_member_and_stranger() {
    let (state, _dir) = create_test_state(None).await;
    let pool = &state.pool;
    let creator = create_user(pool, "creator").await;
    let member = create_user(pool, "member").await;
    let stranger = create_user(pool, "stranger").await;

    let project = Project::new("Guarded".into(), String::new(), creator);
    ProjectRepository::create(pool, &project).await.unwrap();
    ProjectMemberRepository::add(pool, &ProjectMember::new(project.id, member))
        .await
        .unwrap();
    let entity = EntityRef::Project(project.id);

    let access = authorize(pool, creator, entity, AccessPolicy::CreatorOnly, "archive")
        .await
        .unwrap();
    assert!(access.is_creator());

    authorize(pool, member, entity, AccessPolicy::MemberOrCreator, "write")
        .await
        .unwrap();

    match authorize(pool, member, entity, AccessPolicy::CreatorOnly, "remove members").await {
        Err(ApiError::Forbidden { message, .. }) => {
            assert_eq!(message, "Only the project creator can remove members.")
        }
        other => panic!("Expected Forbidden, got {:?}", other),
    }

    assert!(matches!(
        authorize(pool, stranger, entity, AccessPolicy::MemberOrCreator, "write").await,
        Err(ApiError::Forbidden { .. })
    ));
}

#[tokio::test]
async fn test_authorize_unknown_entity_is_not_found() {
    let (state, _dir) = create_test_state(None).await;
    let user = create_user(&state.pool, "someone").await;
    let missing = Uuid::new_v4();

    match authorize(
        &state.pool,
        user,
        EntityRef::Task(missing),
        AccessPolicy::MemberOrCreator,
        "update this task",
    )
    .await
    {
        Err(ApiError::NotFound { message, .. }) => {
            assert_eq!(message, format!("Task not found for id {missing}."))
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}
