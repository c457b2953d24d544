use crate::Result as DbErrorResult;

use kb_core::TaskTag;

use uuid::Uuid;

pub struct TaskTagRepository;

impl TaskTagRepository {
    pub async fn exists<'e, E>(executor: E, task_id: Uuid, tag_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM kb_task_tags WHERE task_id = ? AND tag_id = ?)",
        )
        .bind(task_id.to_string())
        .bind(tag_id.to_string())
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    /// Insert the association. Returns `false` when the pair already existed.
    pub async fn create<'e, E>(executor: E, task_tag: &TaskTag) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("INSERT OR IGNORE INTO kb_task_tags (id, task_id, tag_id) VALUES (?, ?, ?)")
            .bind(task_tag.id.to_string())
            .bind(task_tag.task_id.to_string())
            .bind(task_tag.tag_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove the association. Returns `false` when there was none.
    pub async fn delete<'e, E>(executor: E, task_id: Uuid, tag_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM kb_task_tags WHERE task_id = ? AND tag_id = ?")
            .bind(task_id.to_string())
            .bind(tag_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
