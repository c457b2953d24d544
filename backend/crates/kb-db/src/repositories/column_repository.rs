use crate::{DbError, Result as DbErrorResult};
use crate::repositories::row::{MEMBER_PREDICATE, parse_uuid};

use kb_core::Column;
use kb_core::position::{clamp_insert_position, densify, next_position};

use std::collections::HashSet;

use sqlx::{FromRow, SqliteConnection};
use uuid::Uuid;

const SELECT_COLUMN: &str = r#"
    SELECT c.id, c.board_id, c.name, c.color, c.wip_limit, c.position
    FROM kb_columns c
    JOIN kb_boards b ON b.id = c.board_id
    JOIN kb_projects p ON p.id = b.project_id
"#;

#[derive(FromRow)]
struct ColumnRow {
    id: String,
    board_id: String,
    name: String,
    color: String,
    wip_limit: Option<i64>,
    position: i64,
}

impl TryFrom<ColumnRow> for Column {
    type Error = DbError;

    fn try_from(row: ColumnRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: parse_uuid(&row.id, "kb_columns", "id")?,
            board_id: parse_uuid(&row.board_id, "kb_columns", "board_id")?,
            name: row.name,
            color: row.color,
            wip_limit: row.wip_limit,
            position: row.position,
        })
    }
}

pub struct ColumnRepository;

impl ColumnRepository {
    /// Insert with the position already set on `column`. Callers own the
    /// density of the board (template expansion on a fresh board).
    pub async fn create<'e, E>(executor: E, column: &Column) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO kb_columns (id, board_id, name, color, wip_limit, position)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(column.id.to_string())
        .bind(column.board_id.to_string())
        .bind(&column.name)
        .bind(&column.color)
        .bind(column.wip_limit)
        .bind(column.position)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Insert `column` at `requested` (append when `None`), shifting siblings
    /// at or after that slot. Returns the stored position.
    pub async fn insert_at(
        conn: &mut SqliteConnection,
        column: &Column,
        requested: Option<i64>,
    ) -> DbErrorResult<i64> {
        let max = Self::max_position(&mut *conn, column.board_id).await?;
        let position = clamp_insert_position(requested, next_position(max));

        sqlx::query("UPDATE kb_columns SET position = position + 1 WHERE board_id = ? AND position >= ?")
            .bind(column.board_id.to_string())
            .bind(position)
            .execute(&mut *conn)
            .await?;

        let placed = Column {
            position,
            ..column.clone()
        };
        Self::create(&mut *conn, &placed).await?;

        Ok(position)
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_COLUMN} WHERE c.id = ?");
        let row: Option<ColumnRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(Column::try_from).transpose()
    }

    pub async fn find_visible_by_id<'e, E>(
        executor: E,
        id: Uuid,
        principal: Uuid,
    ) -> DbErrorResult<Option<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_COLUMN} WHERE c.id = ? AND {MEMBER_PREDICATE}");
        let principal = principal.to_string();
        let row: Option<ColumnRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(&principal)
            .bind(&principal)
            .fetch_optional(executor)
            .await?;

        row.map(Column::try_from).transpose()
    }

    pub async fn find_visible<'e, E>(executor: E, principal: Uuid) -> DbErrorResult<Vec<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_COLUMN} WHERE {MEMBER_PREDICATE} ORDER BY c.board_id, c.position");
        let principal = principal.to_string();
        let rows: Vec<ColumnRow> = sqlx::query_as(&sql)
            .bind(&principal)
            .bind(&principal)
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Column::try_from).collect()
    }

    /// Columns of one board in display order.
    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_COLUMN} WHERE c.board_id = ? ORDER BY c.position");
        let rows: Vec<ColumnRow> = sqlx::query_as(&sql)
            .bind(board_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.into_iter().map(Column::try_from).collect()
    }

    /// Name, color and WIP limit. Position changes go through
    /// [`ColumnRepository::reorder`].
    pub async fn update<'e, E>(executor: E, column: &Column) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE kb_columns SET name = ?, color = ?, wip_limit = ? WHERE id = ?")
            .bind(&column.name)
            .bind(&column.color)
            .bind(column.wip_limit)
            .bind(column.id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn max_position<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Option<i64>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: Option<i64> =
            sqlx::query_scalar("SELECT MAX(position) FROM kb_columns WHERE board_id = ?")
                .bind(board_id.to_string())
                .fetch_one(executor)
                .await?;

        Ok(max)
    }

    /// Give `order[i]` position `i`, then re-densify the board.
    ///
    /// Every id must belong to `board_id`; the first one that does not yields
    /// [`DbError::NotFound`] and the caller's transaction must be dropped.
    /// Repeated ids keep the last index they were given.
    pub async fn reorder(
        conn: &mut SqliteConnection,
        board_id: Uuid,
        order: &[Uuid],
    ) -> DbErrorResult<()> {
        let board = board_id.to_string();

        for (index, column_id) in order.iter().enumerate() {
            let result = sqlx::query("UPDATE kb_columns SET position = ? WHERE id = ? AND board_id = ?")
                .bind(index as i64)
                .bind(column_id.to_string())
                .bind(&board)
                .execute(&mut *conn)
                .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::not_found("Column", *column_id));
            }
        }

        let placed: HashSet<Uuid> = order.iter().copied().collect();
        Self::densify_board(conn, board_id, &placed).await
    }

    /// Close gaps left by a deletion.
    pub async fn compact(conn: &mut SqliteConnection, board_id: Uuid) -> DbErrorResult<()> {
        Self::densify_board(conn, board_id, &HashSet::new()).await
    }

    async fn densify_board(
        conn: &mut SqliteConnection,
        board_id: Uuid,
        placed: &HashSet<Uuid>,
    ) -> DbErrorResult<()> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT id, position FROM kb_columns WHERE board_id = ? ORDER BY position, rowid")
                .bind(board_id.to_string())
                .fetch_all(&mut *conn)
                .await?;

        let rows = rows
            .iter()
            .map(|(id, position)| Ok((parse_uuid(id, "kb_columns", "id")?, *position)))
            .collect::<DbErrorResult<Vec<_>>>()?;

        for (id, position) in densify(&rows, placed) {
            sqlx::query("UPDATE kb_columns SET position = ? WHERE id = ?")
                .bind(position)
                .bind(id.to_string())
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }
}
