use kb_core::User;
use kb_db::UserRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    kb_db::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user row so foreign keys resolve
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> Uuid {
    let user = User::new(Uuid::new_v4(), username.to_string());
    UserRepository::ensure(pool, &user)
        .await
        .expect("Failed to create test user");
    user.id
}
