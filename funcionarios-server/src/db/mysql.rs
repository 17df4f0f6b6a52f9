//! MySQL server backend

use shared::error::AppError;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use std::str::FromStr;

use super::DbPool;
use crate::config::DatabaseConfig;

pub type Db = sqlx::MySql;

/// Connect to `DATABASE_URL`, or to the server assembled from the `DB_*` parts
pub(super) async fn connect(config: &DatabaseConfig) -> Result<DbPool, AppError> {
    let options = match &config.url {
        Some(url) => MySqlConnectOptions::from_str(url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?,
        None => MySqlConnectOptions::new()
            .host(config.host())
            .port(config.port)
            .username(config.user())
            .password(config.password())
            .database(&config.name),
    }
    .charset("utf8mb4");

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|e| AppError::database(format!("Failed to connect to MySQL: {e}")))?;

    tracing::info!(
        host = %config.host(),
        port = config.port,
        database = %config.name,
        max_connections = config.max_connections,
        "Database connection established (MySQL)"
    );
    Ok(pool)
}

pub(super) async fn migrate(pool: &DbPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/mysql")
        .run(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
    tracing::info!("Database migrations applied");
    Ok(())
}
