use crate::Result as DbErrorResult;
use crate::repositories::row::{parse_timestamp, parse_uuid};

use kb_core::User;

use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: Option<String>,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = crate::DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: parse_uuid(&row.id, "users", "id")?,
            username: row.username,
            email: row.email,
            created_at: parse_timestamp(row.created_at, "users", "created_at")?,
        })
    }
}

pub struct UserRepository;

impl UserRepository {
    /// Insert the user unless a row with the same id exists. Existing rows are
    /// left untouched.
    pub async fn ensure<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO users (id, username, email, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, username, email, created_at FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(User::try_from).transpose()
    }
}
