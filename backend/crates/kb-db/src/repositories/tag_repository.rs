use crate::Result as DbErrorResult;
use crate::repositories::row::parse_uuid;

use kb_core::Tag;

use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
struct TagRow {
    id: String,
    name: String,
    color: String,
    user_id: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = crate::DbError;

    fn try_from(row: TagRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: parse_uuid(&row.id, "kb_tags", "id")?,
            name: row.name,
            color: row.color,
            user_id: parse_uuid(&row.user_id, "kb_tags", "user_id")?,
        })
    }
}

/// Tags are private: every lookup except [`TagRepository::find_by_task`] is
/// scoped to the owning user.
pub struct TagRepository;

impl TagRepository {
    pub async fn create<'e, E>(executor: E, tag: &Tag) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO kb_tags (id, name, color, user_id) VALUES (?, ?, ?, ?)")
            .bind(tag.id.to_string())
            .bind(&tag.name)
            .bind(&tag.color)
            .bind(tag.user_id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn find_owned<'e, E>(executor: E, id: Uuid, owner: Uuid) -> DbErrorResult<Option<Tag>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<TagRow> =
            sqlx::query_as("SELECT id, name, color, user_id FROM kb_tags WHERE id = ? AND user_id = ?")
                .bind(id.to_string())
                .bind(owner.to_string())
                .fetch_optional(executor)
                .await?;

        row.map(Tag::try_from).transpose()
    }

    pub async fn find_by_owner<'e, E>(executor: E, owner: Uuid) -> DbErrorResult<Vec<Tag>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<TagRow> =
            sqlx::query_as("SELECT id, name, color, user_id FROM kb_tags WHERE user_id = ? ORDER BY name")
                .bind(owner.to_string())
                .fetch_all(executor)
                .await?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    /// True when `owner` already has a tag called `name`, other than `except`.
    pub async fn name_taken<'e, E>(
        executor: E,
        owner: Uuid,
        name: &str,
        except: Option<Uuid>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let taken: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM kb_tags
                WHERE user_id = ? AND name = ? AND (? IS NULL OR id <> ?)
            )
            "#,
        )
        .bind(owner.to_string())
        .bind(name)
        .bind(except.map(|id| id.to_string()))
        .bind(except.map(|id| id.to_string()))
        .fetch_one(executor)
        .await?;

        Ok(taken)
    }

    /// Every tag on a task, whoever owns it.
    pub async fn find_by_task<'e, E>(executor: E, task_id: Uuid) -> DbErrorResult<Vec<Tag>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<TagRow> = sqlx::query_as(
            r#"
            SELECT g.id, g.name, g.color, g.user_id
            FROM kb_tags g
            JOIN kb_task_tags tt ON tt.tag_id = g.id
            WHERE tt.task_id = ?
            ORDER BY g.name
            "#,
        )
        .bind(task_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    pub async fn update<'e, E>(executor: E, tag: &Tag) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE kb_tags SET name = ?, color = ? WHERE id = ?")
            .bind(&tag.name)
            .bind(&tag.color)
            .bind(tag.id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }
}
