//! Embedded SQLite backend

use shared::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

use super::DbPool;
use super::collation::{NAME_COLLATION, compare_names};
use crate::config::DatabaseConfig;

pub type Db = sqlx::Sqlite;

/// Open (or create) the database file with WAL mode
pub(super) async fn connect(config: &DatabaseConfig) -> Result<DbPool, AppError> {
    if config.url.is_none() && config.has_server_settings() {
        tracing::warn!("DB_HOST/DB_USER/DB_PASSWD only apply to the mysql build; using SQLite");
    }

    let options = match &config.url {
        Some(url) => SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?,
        None => SqliteConnectOptions::new().filename(format!("{}.db", config.name)),
    }
    .create_if_missing(true)
    .journal_mode(SqliteJournalMode::Wal)
    .synchronous(SqliteSynchronous::Normal)
    .foreign_keys(true)
    // Wait on write contention instead of failing immediately
    .busy_timeout(Duration::from_secs(5))
    .collation(NAME_COLLATION, compare_names);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

    tracing::info!(
        name = %config.name,
        max_connections = config.max_connections,
        "Database connection established (SQLite WAL)"
    );
    Ok(pool)
}

/// A single connection that is never recycled keeps the database alive for
/// the lifetime of the pool
pub(super) async fn connect_in_memory() -> Result<DbPool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
        .foreign_keys(true)
        .collation(NAME_COLLATION, compare_names);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))
}

pub(super) async fn migrate(pool: &DbPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
    tracing::info!("Database migrations applied");
    Ok(())
}
