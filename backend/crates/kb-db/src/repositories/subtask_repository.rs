use crate::Result as DbErrorResult;
use crate::repositories::row::{MEMBER_PREDICATE, parse_uuid};

use kb_core::SubTask;

use sqlx::FromRow;
use uuid::Uuid;

const SELECT_SUBTASK: &str = r#"
    SELECT s.id, s.task_id, s.title, s.is_completed
    FROM kb_subtasks s
    JOIN kb_tasks t ON t.id = s.task_id
    JOIN kb_columns c ON c.id = t.column_id
    JOIN kb_boards b ON b.id = c.board_id
    JOIN kb_projects p ON p.id = b.project_id
"#;

#[derive(FromRow)]
struct SubTaskRow {
    id: String,
    task_id: String,
    title: String,
    is_completed: bool,
}

impl TryFrom<SubTaskRow> for SubTask {
    type Error = crate::DbError;

    fn try_from(row: SubTaskRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: parse_uuid(&row.id, "kb_subtasks", "id")?,
            task_id: parse_uuid(&row.task_id, "kb_subtasks", "task_id")?,
            title: row.title,
            is_completed: row.is_completed,
        })
    }
}

pub struct SubTaskRepository;

impl SubTaskRepository {
    pub async fn create<'e, E>(executor: E, subtask: &SubTask) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO kb_subtasks (id, task_id, title, is_completed) VALUES (?, ?, ?, ?)")
            .bind(subtask.id.to_string())
            .bind(subtask.task_id.to_string())
            .bind(&subtask.title)
            .bind(subtask.is_completed)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn find_visible_by_id<'e, E>(
        executor: E,
        id: Uuid,
        principal: Uuid,
    ) -> DbErrorResult<Option<SubTask>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_SUBTASK} WHERE s.id = ? AND {MEMBER_PREDICATE}");
        let principal = principal.to_string();
        let row: Option<SubTaskRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(&principal)
            .bind(&principal)
            .fetch_optional(executor)
            .await?;

        row.map(SubTask::try_from).transpose()
    }

    pub async fn find_visible<'e, E>(executor: E, principal: Uuid) -> DbErrorResult<Vec<SubTask>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_SUBTASK} WHERE {MEMBER_PREDICATE} ORDER BY s.task_id, s.rowid");
        let principal = principal.to_string();
        let rows: Vec<SubTaskRow> = sqlx::query_as(&sql)
            .bind(&principal)
            .bind(&principal)
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(SubTask::try_from).collect()
    }

    pub async fn find_by_task<'e, E>(executor: E, task_id: Uuid) -> DbErrorResult<Vec<SubTask>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_SUBTASK} WHERE s.task_id = ? ORDER BY s.rowid");
        let rows: Vec<SubTaskRow> = sqlx::query_as(&sql)
            .bind(task_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(SubTask::try_from).collect()
    }

    pub async fn update<'e, E>(executor: E, subtask: &SubTask) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE kb_subtasks SET title = ?, is_completed = ? WHERE id = ?")
            .bind(&subtask.title)
            .bind(subtask.is_completed)
            .bind(subtask.id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("DELETE FROM kb_subtasks WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }
}
