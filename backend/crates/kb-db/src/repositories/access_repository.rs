//! Resolves any entity to its owning project and the caller's standing in it.

use crate::Result as DbErrorResult;
use crate::repositories::row::parse_uuid;

use kb_core::{EntityRef, ProjectAccess};

use uuid::Uuid;

pub struct AccessRepository;

impl AccessRepository {
    /// Walk the ownership chain of `entity` up to its project.
    ///
    /// Returns `None` when the entity does not exist. Membership is evaluated
    /// for `principal`; the creator check is left to [`ProjectAccess`].
    pub async fn project_access<'e, E>(
        executor: E,
        entity: EntityRef,
        principal: Uuid,
    ) -> DbErrorResult<Option<ProjectAccess>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            r#"
            SELECT p.id, p.created_by,
                   EXISTS (
                       SELECT 1 FROM kb_project_members m
                       WHERE m.project_id = p.id AND m.user_id = ?
                   ) AS is_member
            {}
            "#,
            ownership_path(entity)
        );

        let row: Option<(String, String, bool)> = sqlx::query_as(&sql)
            .bind(principal.to_string())
            .bind(entity.id().to_string())
            .fetch_optional(executor)
            .await?;

        let Some((project_id, created_by, is_member)) = row else {
            return Ok(None);
        };

        Ok(Some(ProjectAccess {
            project_id: parse_uuid(&project_id, "kb_projects", "id")?,
            created_by: parse_uuid(&created_by, "kb_projects", "created_by")?,
            principal,
            is_member,
        }))
    }
}

/// `FROM ... WHERE <entity>.id = ?` joining up to `kb_projects p`.
fn ownership_path(entity: EntityRef) -> &'static str {
    match entity {
        EntityRef::Project(_) => "FROM kb_projects p WHERE p.id = ?",
        EntityRef::Board(_) => {
            "FROM kb_boards b JOIN kb_projects p ON p.id = b.project_id WHERE b.id = ?"
        }
        EntityRef::Column(_) => {
            "FROM kb_columns c \
             JOIN kb_boards b ON b.id = c.board_id \
             JOIN kb_projects p ON p.id = b.project_id \
             WHERE c.id = ?"
        }
        EntityRef::Task(_) => {
            "FROM kb_tasks t \
             JOIN kb_columns c ON c.id = t.column_id \
             JOIN kb_boards b ON b.id = c.board_id \
             JOIN kb_projects p ON p.id = b.project_id \
             WHERE t.id = ?"
        }
        EntityRef::SubTask(_) => {
            "FROM kb_subtasks s \
             JOIN kb_tasks t ON t.id = s.task_id \
             JOIN kb_columns c ON c.id = t.column_id \
             JOIN kb_boards b ON b.id = c.board_id \
             JOIN kb_projects p ON p.id = b.project_id \
             WHERE s.id = ?"
        }
        EntityRef::Comment(_) => {
            "FROM kb_comments k \
             JOIN kb_tasks t ON t.id = k.task_id \
             JOIN kb_columns c ON c.id = t.column_id \
             JOIN kb_boards b ON b.id = c.board_id \
             JOIN kb_projects p ON p.id = b.project_id \
             WHERE k.id = ?"
        }
        EntityRef::Attachment(_) => {
            "FROM kb_attachments a \
             JOIN kb_tasks t ON t.id = a.task_id \
             JOIN kb_columns c ON c.id = t.column_id \
             JOIN kb_boards b ON b.id = c.board_id \
             JOIN kb_projects p ON p.id = b.project_id \
             WHERE a.id = ?"
        }
    }
}
