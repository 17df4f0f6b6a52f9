//! User Model (authentication only)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `usuarios` row
///
/// `senha` holds an argon2 PHC string and never leaves the server.
#[derive(Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub criado_em: NaiveDateTime,
}

impl User {
    /// Public part of the row, returned on successful login
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            nome: self.nome.clone(),
            email: self.email.clone(),
            criado_em: self.criado_em,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("nome", &self.nome)
            .field("email", &self.email)
            .field("senha", &"<redacted>")
            .field("criado_em", &self.criado_em)
            .finish()
    }
}

/// User profile returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub criado_em: NaiveDateTime,
}

/// Login request payload
///
/// Missing fields deserialize as empty strings so that they fail the
/// credential check (401) instead of the JSON extractor.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
