use crate::Result as DbErrorResult;
use crate::repositories::row::{MEMBER_PREDICATE, parse_timestamp, parse_uuid};

use kb_core::Project;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

const SELECT_PROJECT: &str = r#"
    SELECT p.id, p.name, p.description, p.created_by, p.is_archived,
           p.created_at, p.updated_at
    FROM kb_projects p
"#;

#[derive(FromRow)]
struct ProjectRow {
    id: String,
    name: String,
    description: String,
    created_by: String,
    is_archived: bool,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = crate::DbError;

    fn try_from(row: ProjectRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: parse_uuid(&row.id, "kb_projects", "id")?,
            name: row.name,
            description: row.description,
            created_by: parse_uuid(&row.created_by, "kb_projects", "created_by")?,
            is_archived: row.is_archived,
            created_at: parse_timestamp(row.created_at, "kb_projects", "created_at")?,
            updated_at: parse_timestamp(row.updated_at, "kb_projects", "updated_at")?,
        })
    }
}

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO kb_projects (
                id, name, description, created_by, is_archived, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.created_by.to_string())
        .bind(project.is_archived)
        .bind(project.created_at.timestamp())
        .bind(project.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_PROJECT} WHERE p.id = ?");
        let row: Option<ProjectRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(Project::try_from).transpose()
    }

    /// Fetch a project only if `principal` is its creator or a member.
    pub async fn find_visible_by_id<'e, E>(
        executor: E,
        id: Uuid,
        principal: Uuid,
    ) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_PROJECT} WHERE p.id = ? AND {MEMBER_PREDICATE}");
        let principal = principal.to_string();
        let row: Option<ProjectRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(&principal)
            .bind(&principal)
            .fetch_optional(executor)
            .await?;

        row.map(Project::try_from).transpose()
    }

    pub async fn find_visible<'e, E>(executor: E, principal: Uuid) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_PROJECT} WHERE {MEMBER_PREDICATE} ORDER BY p.created_at DESC, p.name");
        let principal = principal.to_string();
        let rows: Vec<ProjectRow> = sqlx::query_as(&sql)
            .bind(&principal)
            .bind(&principal)
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Project::try_from).collect()
    }

    pub async fn update<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            UPDATE kb_projects
            SET name = ?, description = ?, is_archived = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.is_archived)
        .bind(project.updated_at.timestamp())
        .bind(project.id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn set_archived<'e, E>(
        executor: E,
        id: Uuid,
        archived: bool,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE kb_projects SET is_archived = ?, updated_at = ? WHERE id = ?")
            .bind(archived)
            .bind(updated_at.timestamp())
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }
}
