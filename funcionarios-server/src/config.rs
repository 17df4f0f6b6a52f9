//! Server configuration

use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_NAME: &str = "projeto-funcionarios";

/// Configuration errors (reported at startup)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Storage connection settings
///
/// The MySQL build connects to `host:port` as `user`; the SQLite build
/// keeps its data in `<name>.db` and has no use for the server settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// DATABASE_URL, replacing every part below when set
    pub url: Option<String>,
    /// DB_HOST
    pub host: Option<String>,
    /// DB_PORT
    pub port: u16,
    /// DB_USER
    pub user: Option<String>,
    /// DB_PASSWD; there is no fallback credential
    pub password: Option<String>,
    /// DB_NAME
    pub name: String,
    /// DB_MAX_CONNECTIONS: pool capacity
    pub max_connections: u32,
    /// DB_ACQUIRE_TIMEOUT_SECS: how long a request waits for a pooled connection
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_DB_HOST)
    }

    pub fn user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_DB_USER)
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    /// Whether any of the server settings was given explicitly
    pub fn has_server_settings(&self) -> bool {
        self.host.is_some() || self.user.is_some() || self.password.is_some()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: None,
            port: DEFAULT_DB_PORT,
            user: None,
            password: None,
            name: DEFAULT_DB_NAME.to_string(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host())
            .field("port", &self.port)
            .field("user", &self.user())
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish_non_exhaustive()
    }
}

/// Optional first login account, created at startup when absent
#[derive(Clone)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUser")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    /// Listen address
    pub host: String,
    /// Listen port
    pub http_port: u16,
    /// SEED_ADMIN_EMAIL + SEED_ADMIN_PASSWORD
    pub seed_user: Option<SeedUser>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database = DatabaseConfig {
            url: var("DATABASE_URL"),
            host: var("DB_HOST"),
            port: parse_or("DB_PORT", var("DB_PORT"), DEFAULT_DB_PORT)?,
            user: var("DB_USER"),
            // An empty password is a valid explicit choice
            password: lookup("DB_PASSWD"),
            name: var("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.into()),
            max_connections: parse_or("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS"), 10)?,
            acquire_timeout: Duration::from_secs(parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                var("DB_ACQUIRE_TIMEOUT_SECS"),
                30,
            )?),
        };

        let seed_user = match (var("SEED_ADMIN_EMAIL"), lookup("SEED_ADMIN_PASSWORD")) {
            (Some(_), Some(password)) if password.is_empty() => {
                return Err(ConfigError::Empty {
                    name: "SEED_ADMIN_PASSWORD",
                });
            }
            (Some(email), Some(password)) => Some(SeedUser { email, password }),
            _ => None,
        };

        Ok(Self {
            database,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: parse_or("PORT", var("PORT"), 3000)?,
            seed_user,
        })
    }

    /// `host:port` to bind
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
    }
}
