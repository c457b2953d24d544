use crate::Result as DbErrorResult;
use crate::repositories::row::{MEMBER_PREDICATE, parse_timestamp, parse_uuid};

use kb_core::Comment;

use sqlx::FromRow;
use uuid::Uuid;

const SELECT_COMMENT: &str = r#"
    SELECT k.id, k.task_id, k.user_id, k.content, k.created_at
    FROM kb_comments k
    JOIN kb_tasks t ON t.id = k.task_id
    JOIN kb_columns c ON c.id = t.column_id
    JOIN kb_boards b ON b.id = c.board_id
    JOIN kb_projects p ON p.id = b.project_id
"#;

#[derive(FromRow)]
struct CommentRow {
    id: String,
    task_id: String,
    user_id: String,
    content: String,
    created_at: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = crate::DbError;

    fn try_from(row: CommentRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: parse_uuid(&row.id, "kb_comments", "id")?,
            task_id: parse_uuid(&row.task_id, "kb_comments", "task_id")?,
            user_id: parse_uuid(&row.user_id, "kb_comments", "user_id")?,
            content: row.content,
            created_at: parse_timestamp(row.created_at, "kb_comments", "created_at")?,
        })
    }
}

pub struct CommentRepository;

impl CommentRepository {
    pub async fn create<'e, E>(executor: E, comment: &Comment) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            "INSERT INTO kb_comments (id, task_id, user_id, content, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(comment.id.to_string())
        .bind(comment.task_id.to_string())
        .bind(comment.user_id.to_string())
        .bind(&comment.content)
        .bind(comment.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_visible_by_id<'e, E>(
        executor: E,
        id: Uuid,
        principal: Uuid,
    ) -> DbErrorResult<Option<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_COMMENT} WHERE k.id = ? AND {MEMBER_PREDICATE}");
        let principal = principal.to_string();
        let row: Option<CommentRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(&principal)
            .bind(&principal)
            .fetch_optional(executor)
            .await?;

        row.map(Comment::try_from).transpose()
    }

    pub async fn find_visible<'e, E>(executor: E, principal: Uuid) -> DbErrorResult<Vec<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_COMMENT} WHERE {MEMBER_PREDICATE} ORDER BY k.created_at DESC, k.rowid DESC");
        let principal = principal.to_string();
        let rows: Vec<CommentRow> = sqlx::query_as(&sql)
            .bind(&principal)
            .bind(&principal)
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    /// Newest first.
    pub async fn find_by_task<'e, E>(executor: E, task_id: Uuid) -> DbErrorResult<Vec<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_COMMENT} WHERE k.task_id = ? ORDER BY k.created_at DESC, k.rowid DESC");
        let rows: Vec<CommentRow> = sqlx::query_as(&sql)
            .bind(task_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    pub async fn update<'e, E>(executor: E, comment: &Comment) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE kb_comments SET content = ? WHERE id = ?")
            .bind(&comment.content)
            .bind(comment.id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("DELETE FROM kb_comments WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }
}
