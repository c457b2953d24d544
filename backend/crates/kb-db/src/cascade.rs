//! Explicit cascade deletes.
//!
//! Each function removes an entity and everything beneath it on the caller's
//! connection, which should be inside a transaction. Functions that remove
//! attachments return their blob keys so the caller can delete the files after
//! commit.

use crate::repositories::column_repository::ColumnRepository;
use crate::repositories::task_repository::TaskRepository;
use crate::{DbError, Result as DbErrorResult};

use sqlx::SqliteConnection;
use uuid::Uuid;

const TASKS_IN_PROJECT: &str = "SELECT t.id FROM kb_tasks t \
     JOIN kb_columns c ON c.id = t.column_id \
     JOIN kb_boards b ON b.id = c.board_id \
     WHERE b.project_id = ?";
const TASKS_IN_BOARD: &str =
    "SELECT t.id FROM kb_tasks t JOIN kb_columns c ON c.id = t.column_id WHERE c.board_id = ?";
const TASKS_IN_COLUMN: &str = "SELECT id FROM kb_tasks WHERE column_id = ?";
const SINGLE_TASK: &str = "SELECT id FROM kb_tasks WHERE id = ?";

/// Delete tasks selected by `task_scope` (a subquery with one `?` bound to
/// `scope_id`) along with their attachments, comments, tag links and subtasks.
async fn delete_tasks_in(
    conn: &mut SqliteConnection,
    task_scope: &str,
    scope_id: &str,
) -> DbErrorResult<Vec<String>> {
    let file_keys: Vec<String> = sqlx::query_scalar(&format!(
        "SELECT file_key FROM kb_attachments WHERE task_id IN ({task_scope})"
    ))
    .bind(scope_id)
    .fetch_all(&mut *conn)
    .await?;

    for child in ["kb_attachments", "kb_comments", "kb_task_tags", "kb_subtasks"] {
        sqlx::query(&format!("DELETE FROM {child} WHERE task_id IN ({task_scope})"))
            .bind(scope_id)
            .execute(&mut *conn)
            .await?;
    }

    sqlx::query(&format!("DELETE FROM kb_tasks WHERE id IN ({task_scope})"))
        .bind(scope_id)
        .execute(&mut *conn)
        .await?;

    Ok(file_keys)
}

pub async fn delete_project(conn: &mut SqliteConnection, project_id: Uuid) -> DbErrorResult<Vec<String>> {
    let id = project_id.to_string();
    let file_keys = delete_tasks_in(conn, TASKS_IN_PROJECT, &id).await?;

    sqlx::query("DELETE FROM kb_columns WHERE board_id IN (SELECT id FROM kb_boards WHERE project_id = ?)")
        .bind(&id)
        .execute(&mut *conn)
        .await?;
    sqlx::query("DELETE FROM kb_boards WHERE project_id = ?")
        .bind(&id)
        .execute(&mut *conn)
        .await?;
    sqlx::query("DELETE FROM kb_project_members WHERE project_id = ?")
        .bind(&id)
        .execute(&mut *conn)
        .await?;

    let result = sqlx::query("DELETE FROM kb_projects WHERE id = ?")
        .bind(&id)
        .execute(&mut *conn)
        .await?;
    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Project", project_id));
    }

    Ok(file_keys)
}

pub async fn delete_board(conn: &mut SqliteConnection, board_id: Uuid) -> DbErrorResult<Vec<String>> {
    let id = board_id.to_string();
    let file_keys = delete_tasks_in(conn, TASKS_IN_BOARD, &id).await?;

    sqlx::query("DELETE FROM kb_columns WHERE board_id = ?")
        .bind(&id)
        .execute(&mut *conn)
        .await?;

    let result = sqlx::query("DELETE FROM kb_boards WHERE id = ?")
        .bind(&id)
        .execute(&mut *conn)
        .await?;
    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Board", board_id));
    }

    Ok(file_keys)
}

/// Also re-densifies the remaining columns of the board.
pub async fn delete_column(conn: &mut SqliteConnection, column_id: Uuid) -> DbErrorResult<Vec<String>> {
    let column = ColumnRepository::find_by_id(&mut *conn, column_id)
        .await?
        .ok_or_else(|| DbError::not_found("Column", column_id))?;

    let id = column_id.to_string();
    let file_keys = delete_tasks_in(conn, TASKS_IN_COLUMN, &id).await?;

    sqlx::query("DELETE FROM kb_columns WHERE id = ?")
        .bind(&id)
        .execute(&mut *conn)
        .await?;

    ColumnRepository::compact(conn, column.board_id).await?;

    Ok(file_keys)
}

/// Also re-densifies the remaining tasks of the column.
pub async fn delete_task(conn: &mut SqliteConnection, task_id: Uuid) -> DbErrorResult<Vec<String>> {
    let task = TaskRepository::find_by_id(&mut *conn, task_id)
        .await?
        .ok_or_else(|| DbError::not_found("Task", task_id))?;

    let file_keys = delete_tasks_in(conn, SINGLE_TASK, &task_id.to_string()).await?;

    TaskRepository::compact(conn, task.column_id).await?;

    Ok(file_keys)
}

/// Tasks that carried the tag are left in place.
pub async fn delete_tag(conn: &mut SqliteConnection, tag_id: Uuid) -> DbErrorResult<()> {
    let id = tag_id.to_string();

    sqlx::query("DELETE FROM kb_task_tags WHERE tag_id = ?")
        .bind(&id)
        .execute(&mut *conn)
        .await?;

    let result = sqlx::query("DELETE FROM kb_tags WHERE id = ?")
        .bind(&id)
        .execute(&mut *conn)
        .await?;
    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Tag", tag_id));
    }

    Ok(())
}
