use crate::{DbError, Result as DbErrorResult};
use crate::repositories::row::{MEMBER_PREDICATE, parse_timestamp, parse_uuid};

use kb_core::{Attachment, ErrorLocation, MAX_ATTACHMENT_BYTES};

use std::panic::Location;

use sqlx::FromRow;
use uuid::Uuid;

const SELECT_ATTACHMENT: &str = r#"
    SELECT a.id, a.task_id, a.file_key, a.name, a.size_bytes, a.uploaded_by, a.uploaded_at
    FROM kb_attachments a
    JOIN kb_tasks t ON t.id = a.task_id
    JOIN kb_columns c ON c.id = t.column_id
    JOIN kb_boards b ON b.id = c.board_id
    JOIN kb_projects p ON p.id = b.project_id
"#;

#[derive(FromRow)]
struct AttachmentRow {
    id: String,
    task_id: String,
    file_key: String,
    name: String,
    size_bytes: i64,
    uploaded_by: String,
    uploaded_at: i64,
}

impl TryFrom<AttachmentRow> for Attachment {
    type Error = DbError;

    fn try_from(row: AttachmentRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: parse_uuid(&row.id, "kb_attachments", "id")?,
            task_id: parse_uuid(&row.task_id, "kb_attachments", "task_id")?,
            file_key: row.file_key,
            name: row.name,
            size_bytes: row.size_bytes,
            uploaded_by: parse_uuid(&row.uploaded_by, "kb_attachments", "uploaded_by")?,
            uploaded_at: parse_timestamp(row.uploaded_at, "kb_attachments", "uploaded_at")?,
        })
    }
}

pub struct AttachmentRepository;

impl AttachmentRepository {
    /// Refuses attachments over [`MAX_ATTACHMENT_BYTES`] before touching the
    /// database.
    pub async fn create<'e, E>(executor: E, attachment: &Attachment) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        if attachment.size_bytes < 0 || attachment.size_bytes as u64 > MAX_ATTACHMENT_BYTES {
            return Err(DbError::AttachmentTooLarge {
                size: attachment.size_bytes,
                max: MAX_ATTACHMENT_BYTES,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        sqlx::query(
            r#"
            INSERT INTO kb_attachments (
                id, task_id, file_key, name, size_bytes, uploaded_by, uploaded_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(attachment.id.to_string())
        .bind(attachment.task_id.to_string())
        .bind(&attachment.file_key)
        .bind(&attachment.name)
        .bind(attachment.size_bytes)
        .bind(attachment.uploaded_by.to_string())
        .bind(attachment.uploaded_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_visible_by_id<'e, E>(
        executor: E,
        id: Uuid,
        principal: Uuid,
    ) -> DbErrorResult<Option<Attachment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_ATTACHMENT} WHERE a.id = ? AND {MEMBER_PREDICATE}");
        let principal = principal.to_string();
        let row: Option<AttachmentRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(&principal)
            .bind(&principal)
            .fetch_optional(executor)
            .await?;

        row.map(Attachment::try_from).transpose()
    }

    pub async fn find_visible<'e, E>(executor: E, principal: Uuid) -> DbErrorResult<Vec<Attachment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_ATTACHMENT} WHERE {MEMBER_PREDICATE} ORDER BY a.uploaded_at DESC, a.rowid DESC");
        let principal = principal.to_string();
        let rows: Vec<AttachmentRow> = sqlx::query_as(&sql)
            .bind(&principal)
            .bind(&principal)
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Attachment::try_from).collect()
    }

    pub async fn find_by_task<'e, E>(executor: E, task_id: Uuid) -> DbErrorResult<Vec<Attachment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_ATTACHMENT} WHERE a.task_id = ? ORDER BY a.uploaded_at DESC, a.rowid DESC");
        let rows: Vec<AttachmentRow> = sqlx::query_as(&sql)
            .bind(task_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Attachment::try_from).collect()
    }

    /// Only the display name is mutable; the file itself is immutable.
    pub async fn rename<'e, E>(executor: E, id: Uuid, name: &str) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE kb_attachments SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("DELETE FROM kb_attachments WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }
}
