use crate::Result as DbErrorResult;
use crate::repositories::row::parse_uuid;

use kb_core::ProjectMember;

use uuid::Uuid;

pub struct ProjectMemberRepository;

impl ProjectMemberRepository {
    /// Add a membership. Returns `false` if the user was already a member.
    pub async fn add<'e, E>(executor: E, member: &ProjectMember) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO kb_project_members (project_id, user_id, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(member.project_id.to_string())
        .bind(member.user_id.to_string())
        .bind(member.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove a membership. Returns `false` if there was none.
    pub async fn remove<'e, E>(executor: E, project_id: Uuid, user_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result =
            sqlx::query("DELETE FROM kb_project_members WHERE project_id = ? AND user_id = ?")
                .bind(project_id.to_string())
                .bind(user_id.to_string())
                .execute(executor)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_user_ids<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Vec<Uuid>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT user_id FROM kb_project_members
            WHERE project_id = ?
            ORDER BY created_at, user_id
            "#,
        )
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter()
            .map(|id| parse_uuid(id, "kb_project_members", "user_id"))
            .collect()
    }

    /// Explicit membership only; the creator is not implied here.
    pub async fn is_member<'e, E>(executor: E, project_id: Uuid, user_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM kb_project_members WHERE project_id = ? AND user_id = ?
            )
            "#,
        )
        .bind(project_id.to_string())
        .bind(user_id.to_string())
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }
}
