//! User Repository (login accounts)

use super::RepoResult;
use crate::db::DbPool;
use shared::models::User;

#[cfg(not(feature = "mysql"))]
const INSERT_IF_ABSENT: &str =
    "INSERT INTO usuarios (nome, email, senha) VALUES (?, ?, ?) ON CONFLICT (email) DO NOTHING";
#[cfg(feature = "mysql")]
const INSERT_IF_ABSENT: &str = "INSERT IGNORE INTO usuarios (nome, email, senha) VALUES (?, ?, ?)";

pub async fn find_by_email(pool: &DbPool, email: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, nome, email, senha, criado_em FROM usuarios WHERE email = ? LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Insert an account unless the email is already registered
///
/// `senha_hash` must already be an argon2 PHC string. Returns whether a row
/// was inserted.
pub async fn insert_if_absent(
    pool: &DbPool,
    nome: &str,
    email: &str,
    senha_hash: &str,
) -> RepoResult<bool> {
    let result = sqlx::query(INSERT_IF_ABSENT)
        .bind(nome)
        .bind(email)
        .bind(senha_hash)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
