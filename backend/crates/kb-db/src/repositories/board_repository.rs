use crate::Result as DbErrorResult;
use crate::repositories::row::{MEMBER_PREDICATE, parse_uuid};

use kb_core::Board;

use sqlx::FromRow;
use uuid::Uuid;

const SELECT_BOARD: &str = r#"
    SELECT b.id, b.project_id, b.name, b.description
    FROM kb_boards b
    JOIN kb_projects p ON p.id = b.project_id
"#;

#[derive(FromRow)]
struct BoardRow {
    id: String,
    project_id: String,
    name: String,
    description: String,
}

impl TryFrom<BoardRow> for Board {
    type Error = crate::DbError;

    fn try_from(row: BoardRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: parse_uuid(&row.id, "kb_boards", "id")?,
            project_id: parse_uuid(&row.project_id, "kb_boards", "project_id")?,
            name: row.name,
            description: row.description,
        })
    }
}

pub struct BoardRepository;

impl BoardRepository {
    pub async fn create<'e, E>(executor: E, board: &Board) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO kb_boards (id, project_id, name, description) VALUES (?, ?, ?, ?)")
            .bind(board.id.to_string())
            .bind(board.project_id.to_string())
            .bind(&board.name)
            .bind(&board.description)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_BOARD} WHERE b.id = ?");
        let row: Option<BoardRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(Board::try_from).transpose()
    }

    pub async fn find_visible_by_id<'e, E>(
        executor: E,
        id: Uuid,
        principal: Uuid,
    ) -> DbErrorResult<Option<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_BOARD} WHERE b.id = ? AND {MEMBER_PREDICATE}");
        let principal = principal.to_string();
        let row: Option<BoardRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(&principal)
            .bind(&principal)
            .fetch_optional(executor)
            .await?;

        row.map(Board::try_from).transpose()
    }

    pub async fn find_visible<'e, E>(executor: E, principal: Uuid) -> DbErrorResult<Vec<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_BOARD} WHERE {MEMBER_PREDICATE} ORDER BY p.created_at, b.name");
        let principal = principal.to_string();
        let rows: Vec<BoardRow> = sqlx::query_as(&sql)
            .bind(&principal)
            .bind(&principal)
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Board::try_from).collect()
    }

    pub async fn find_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Vec<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_BOARD} WHERE b.project_id = ? ORDER BY b.rowid");
        let rows: Vec<BoardRow> = sqlx::query_as(&sql)
            .bind(project_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Board::try_from).collect()
    }

    pub async fn update<'e, E>(executor: E, board: &Board) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE kb_boards SET name = ?, description = ? WHERE id = ?")
            .bind(&board.name)
            .bind(&board.description)
            .bind(board.id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }
}
