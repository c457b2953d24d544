use crate::{DbError, Result as DbErrorResult};

use kb_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use sqlx::{Sqlite, SqlitePool, Transaction};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (creating if needed) the database file at `path` and bring the schema
/// up to date.
pub async fn open_pool(path: &Path) -> DbErrorResult<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to create database directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    log::debug!("Database ready at {}", path.display());
    Ok(pool)
}

/// Single-connection in-memory database with migrations applied.
pub async fn open_in_memory() -> DbErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    // The database lives only as long as its one connection.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Start a transaction that holds the write lock from its first statement.
///
/// Position writes read sibling rows before updating them. A deferred `BEGIN`
/// would fail with `SQLITE_BUSY` on the upgrade when another writer is active;
/// `BEGIN IMMEDIATE` waits on the busy timeout instead.
pub async fn begin_write(pool: &SqlitePool) -> DbErrorResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
