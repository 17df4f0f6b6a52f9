//! Database Module
//!
//! Owns the connection pool and migrations. The default build keeps data in
//! an embedded SQLite file; the `mysql` feature connects to a MySQL server
//! configured through `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWD`/`DB_NAME`.

pub mod repository;

#[cfg(not(feature = "mysql"))]
pub mod collation;
#[cfg(feature = "mysql")]
mod mysql;
#[cfg(not(feature = "mysql"))]
mod sqlite;

#[cfg(feature = "mysql")]
use mysql as backend;
#[cfg(not(feature = "mysql"))]
use sqlite as backend;

use shared::error::AppError;

use crate::config::DatabaseConfig;

pub use backend::Db;

/// Connection pool of the configured backend
pub type DbPool = sqlx::Pool<Db>;

/// Database service - owns the connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: DbPool,
}

impl DbService {
    /// Connect and run migrations
    ///
    /// The pool is bounded by `max_connections`; requests beyond that wait up
    /// to `acquire_timeout` for a connection.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = backend::connect(config).await?;
        backend::migrate(&pool).await?;
        Ok(Self { pool })
    }

    /// Private in-memory database, used by tests
    #[cfg(not(feature = "mysql"))]
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = sqlite::connect_in_memory().await?;
        backend::migrate(&pool).await?;
        Ok(Self { pool })
    }
}
