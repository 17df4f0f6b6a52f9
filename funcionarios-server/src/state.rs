//! Application state

use shared::error::AppError;
use crate::config::Config;
use crate::db::{DbPool, DbService, repository};
use crate::util::hash_password;

/// Shared application state, handed to every handler through axum `State`
#[derive(Clone)]
pub struct AppState {
    /// Connection pool (the only shared resource)
    pub pool: DbPool,
}

impl AppState {
    /// Open the database, apply migrations and seed the first account
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database).await?;
        let state = Self::from_pool(db.pool);

        if let Some(seed) = &config.seed_user {
            state.seed_user(&seed.email, &seed.password).await?;
        }

        Ok(state)
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a login account for `email` unless one exists
    pub async fn seed_user(&self, email: &str, password: &str) -> Result<(), AppError> {
        let hash = hash_password(password)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
        let nome = email.split('@').next().unwrap_or(email);

        if repository::user::insert_if_absent(&self.pool, nome, email, &hash).await? {
            tracing::info!(email = %email, "Seeded login account");
        }
        Ok(())
    }
}
