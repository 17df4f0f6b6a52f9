//! funcionarios-server - employee directory HTTP service
//!
//! - CRUD over `funcionarios` with email uniqueness and existence checks
//! - Login check against `usuarios` (argon2 hashes, no session)
//! - SQLite by default, MySQL with the `mysql` feature, through a bounded
//!   sqlx pool injected via axum state

pub mod api;
pub mod config;
pub mod db;
pub mod middleware;
pub mod state;
pub mod util;

pub use config::{Config, DatabaseConfig};
pub use state::AppState;
