use crate::{DbError, Result as DbErrorResult};
use crate::repositories::row::{
    MEMBER_PREDICATE, parse_optional_uuid, parse_timestamp, parse_uuid, placeholders,
};

use kb_core::position::{clamp_insert_position, densify, next_position};
use kb_core::{ErrorLocation, Task, TaskPriority};

use std::collections::HashSet;
use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection};
use uuid::Uuid;

const SELECT_TASK: &str = r#"
    SELECT t.id, t.column_id, t.title, t.description, t.priority, t.due_date,
           t.created_by, t.assigned_to, t.position, t.created_at, t.updated_at
    FROM kb_tasks t
    JOIN kb_columns c ON c.id = t.column_id
    JOIN kb_boards b ON b.id = c.board_id
    JOIN kb_projects p ON p.id = b.project_id
"#;

#[derive(FromRow)]
struct TaskRow {
    id: String,
    column_id: String,
    title: String,
    description: String,
    priority: String,
    due_date: Option<i64>,
    created_by: String,
    assigned_to: Option<String>,
    position: i64,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<TaskRow> for Task {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: TaskRow) -> DbErrorResult<Self> {
        let priority = TaskPriority::from_str(&row.priority).map_err(|e| DbError::CorruptRow {
            table: "kb_tasks",
            column: "priority",
            message: e.message(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let due_date = match row.due_date {
            Some(ts) => Some(parse_timestamp(ts, "kb_tasks", "due_date")?),
            None => None,
        };

        Ok(Self {
            id: parse_uuid(&row.id, "kb_tasks", "id")?,
            column_id: parse_uuid(&row.column_id, "kb_tasks", "column_id")?,
            title: row.title,
            description: row.description,
            priority,
            due_date,
            created_by: parse_uuid(&row.created_by, "kb_tasks", "created_by")?,
            assigned_to: parse_optional_uuid(row.assigned_to.as_deref(), "kb_tasks", "assigned_to")?,
            position: row.position,
            created_at: parse_timestamp(row.created_at, "kb_tasks", "created_at")?,
            updated_at: parse_timestamp(row.updated_at, "kb_tasks", "updated_at")?,
        })
    }
}

/// Optional narrowing applied to the visible task list.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Inclusive lower bound on `due_date`. Tasks without a due date never match.
    pub due_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `due_date`.
    pub due_to: Option<DateTime<Utc>>,
    /// Tasks must carry every one of these tags.
    pub all_tags: Vec<Uuid>,
}

pub struct TaskRepository;

impl TaskRepository {
    /// Insert with the position already set on `task`.
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO kb_tasks (
                id, column_id, title, description, priority, due_date,
                created_by, assigned_to, position, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.column_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority.as_str())
        .bind(task.due_date.map(|dt| dt.timestamp()))
        .bind(task.created_by.to_string())
        .bind(task.assigned_to.map(|id| id.to_string()))
        .bind(task.position)
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Insert `task` at `requested` (append when `None`), shifting siblings at
    /// or after that slot. Returns the stored position.
    pub async fn insert_at(
        conn: &mut SqliteConnection,
        task: &Task,
        requested: Option<i64>,
    ) -> DbErrorResult<i64> {
        let max = Self::max_position(&mut *conn, task.column_id).await?;
        let position = clamp_insert_position(requested, next_position(max));

        sqlx::query("UPDATE kb_tasks SET position = position + 1 WHERE column_id = ? AND position >= ?")
            .bind(task.column_id.to_string())
            .bind(position)
            .execute(&mut *conn)
            .await?;

        let placed = Task {
            position,
            ..task.clone()
        };
        Self::create(&mut *conn, &placed).await?;

        Ok(position)
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_TASK} WHERE t.id = ?");
        let row: Option<TaskRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(Task::try_from).transpose()
    }

    pub async fn find_visible_by_id<'e, E>(
        executor: E,
        id: Uuid,
        principal: Uuid,
    ) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_TASK} WHERE t.id = ? AND {MEMBER_PREDICATE}");
        let principal = principal.to_string();
        let row: Option<TaskRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(&principal)
            .bind(&principal)
            .fetch_optional(executor)
            .await?;

        row.map(Task::try_from).transpose()
    }

    /// Tasks in projects the principal can see, narrowed by `filter`.
    pub async fn find_visible<'e, E>(
        executor: E,
        principal: Uuid,
        filter: &TaskFilter,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut tags: Vec<String> = Vec::new();
        for tag_id in &filter.all_tags {
            let tag_id = tag_id.to_string();
            if !tags.contains(&tag_id) {
                tags.push(tag_id);
            }
        }

        let mut sql = format!("{SELECT_TASK} WHERE {MEMBER_PREDICATE}");
        if filter.due_from.is_some() {
            sql.push_str(" AND t.due_date >= ?");
        }
        if filter.due_to.is_some() {
            sql.push_str(" AND t.due_date <= ?");
        }
        if !tags.is_empty() {
            sql.push_str(&format!(
                " AND (SELECT COUNT(DISTINCT tt.tag_id) FROM kb_task_tags tt \
                 WHERE tt.task_id = t.id AND tt.tag_id IN ({})) = ?",
                placeholders(tags.len())
            ));
        }
        sql.push_str(" ORDER BY t.column_id, t.position");

        let principal = principal.to_string();
        let mut query = sqlx::query_as::<_, TaskRow>(&sql)
            .bind(&principal)
            .bind(&principal);
        if let Some(from) = filter.due_from {
            query = query.bind(from.timestamp());
        }
        if let Some(to) = filter.due_to {
            query = query.bind(to.timestamp());
        }
        for tag_id in &tags {
            query = query.bind(tag_id);
        }
        if !tags.is_empty() {
            query = query.bind(tags.len() as i64);
        }

        let rows = query.fetch_all(executor).await?;
        rows.into_iter().map(Task::try_from).collect()
    }

    /// Tasks of one column in display order.
    pub async fn find_by_column<'e, E>(executor: E, column_id: Uuid) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_TASK} WHERE t.column_id = ? ORDER BY t.position");
        let rows: Vec<TaskRow> = sqlx::query_as(&sql)
            .bind(column_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    /// Every task assigned to `user_id`, regardless of current membership.
    pub async fn find_assigned_to<'e, E>(executor: E, user_id: Uuid) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_TASK} WHERE t.assigned_to = ? ORDER BY t.due_date IS NULL, t.due_date, t.title");
        let rows: Vec<TaskRow> = sqlx::query_as(&sql)
            .bind(user_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    /// Content fields and assignee. Column and position changes go through
    /// [`TaskRepository::move_tasks`].
    pub async fn update<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            UPDATE kb_tasks
            SET title = ?, description = ?, priority = ?, due_date = ?,
                assigned_to = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.priority.as_str())
        .bind(task.due_date.map(|dt| dt.timestamp()))
        .bind(task.assigned_to.map(|id| id.to_string()))
        .bind(task.updated_at.timestamp())
        .bind(task.id.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn set_assignee<'e, E>(
        executor: E,
        id: Uuid,
        assignee: Option<Uuid>,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE kb_tasks SET assigned_to = ?, updated_at = ? WHERE id = ?")
            .bind(assignee.map(|id| id.to_string()))
            .bind(updated_at.timestamp())
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn max_position<'e, E>(executor: E, column_id: Uuid) -> DbErrorResult<Option<i64>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: Option<i64> =
            sqlx::query_scalar("SELECT MAX(position) FROM kb_tasks WHERE column_id = ?")
                .bind(column_id.to_string())
                .fetch_one(executor)
                .await?;

        Ok(max)
    }

    /// Move the listed tasks from `source` into `destination`.
    ///
    /// `order[i]` is placed at position `i` when it currently lives in
    /// `source`; listed tasks in any other column are left alone. An unknown
    /// id yields [`DbError::NotFound`]. Both columns are re-densified with the
    /// placed tasks winning position ties.
    pub async fn move_tasks(
        conn: &mut SqliteConnection,
        source: Uuid,
        destination: Uuid,
        order: &[Uuid],
    ) -> DbErrorResult<()> {
        let source_id = source.to_string();
        let now = Utc::now().timestamp();
        let mut placed = HashSet::new();

        for (index, task_id) in order.iter().enumerate() {
            let current: Option<String> =
                sqlx::query_scalar("SELECT column_id FROM kb_tasks WHERE id = ?")
                    .bind(task_id.to_string())
                    .fetch_optional(&mut *conn)
                    .await?;

            let Some(current) = current else {
                return Err(DbError::not_found("Task", *task_id));
            };

            if current != source_id {
                continue;
            }

            sqlx::query("UPDATE kb_tasks SET column_id = ?, position = ?, updated_at = ? WHERE id = ?")
                .bind(destination.to_string())
                .bind(index as i64)
                .bind(now)
                .bind(task_id.to_string())
                .execute(&mut *conn)
                .await?;

            placed.insert(*task_id);
        }

        if source != destination {
            Self::densify_column(conn, source, &HashSet::new()).await?;
        }
        Self::densify_column(conn, destination, &placed).await
    }

    /// Close gaps left by a deletion.
    pub async fn compact(conn: &mut SqliteConnection, column_id: Uuid) -> DbErrorResult<()> {
        Self::densify_column(conn, column_id, &HashSet::new()).await
    }

    async fn densify_column(
        conn: &mut SqliteConnection,
        column_id: Uuid,
        placed: &HashSet<Uuid>,
    ) -> DbErrorResult<()> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT id, position FROM kb_tasks WHERE column_id = ? ORDER BY position, rowid")
                .bind(column_id.to_string())
                .fetch_all(&mut *conn)
                .await?;

        let rows = rows
            .iter()
            .map(|(id, position)| Ok((parse_uuid(id, "kb_tasks", "id")?, *position)))
            .collect::<DbErrorResult<Vec<_>>>()?;

        for (id, position) in densify(&rows, placed) {
            sqlx::query("UPDATE kb_tasks SET position = ? WHERE id = ?")
                .bind(position)
                .bind(id.to_string())
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }
}
