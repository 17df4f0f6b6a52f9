//! Repository Module
//!
//! Plain async functions over a [`DbPool`], one module per table. The SQL
//! is shared by both backends except where noted.

pub mod employee;
pub mod user;

use shared::error::AppError;
use thiserror::Error;

#[cfg(doc)]
use crate::db::DbPool;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// A UNIQUE constraint rejected the write
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(_) => AppError::email_taken(),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Id assigned to the row written by an INSERT
#[cfg(not(feature = "mysql"))]
fn inserted_id(result: &sqlx::sqlite::SqliteQueryResult) -> RepoResult<i64> {
    Ok(result.last_insert_rowid())
}

#[cfg(feature = "mysql")]
fn inserted_id(result: &sqlx::mysql::MySqlQueryResult) -> RepoResult<i64> {
    i64::try_from(result.last_insert_id())
        .map_err(|e| RepoError::Database(format!("Inserted id out of range: {e}")))
}
