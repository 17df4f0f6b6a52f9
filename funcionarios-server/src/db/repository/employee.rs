//! Employee Repository

use super::{RepoError, RepoResult, inserted_id};
use shared::models::{Employee, EmployeeDraft};
use crate::db::DbPool;

/// All employees ordered by name
///
/// The `nome` column collation ignores case and accents on both backends;
/// equal names keep insertion order.
pub async fn find_all(pool: &DbPool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, nome, email, cargo, sexo, nascimento, telefone, salario, data_cadastro FROM funcionarios ORDER BY nome, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, nome, email, cargo, sexo, nascimento, telefone, salario, data_cadastro FROM funcionarios WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn exists(pool: &DbPool, id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM funcionarios WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Whether `email` (exact, case-sensitive) belongs to an employee other than `except_id`
pub async fn email_in_use(
    pool: &DbPool,
    email: &str,
    except_id: Option<i64>,
) -> RepoResult<bool> {
    let found: Option<i64> = match except_id {
        Some(id) => {
            sqlx::query_scalar("SELECT id FROM funcionarios WHERE email = ? AND id <> ? LIMIT 1")
                .bind(email)
                .bind(id)
                .fetch_optional(pool)
                .await?
        }
        None => {
            sqlx::query_scalar("SELECT id FROM funcionarios WHERE email = ? LIMIT 1")
                .bind(email)
                .fetch_optional(pool)
                .await?
        }
    };
    Ok(found.is_some())
}

/// Insert a new employee; `data_cadastro` comes from the storage clock
pub async fn create(pool: &DbPool, data: &EmployeeDraft) -> RepoResult<Employee> {
    let result = sqlx::query(
        r#"INSERT INTO funcionarios (nome, email, cargo, sexo, nascimento, telefone, salario, data_cadastro)
           VALUES (?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP)"#,
    )
    .bind(&data.nome)
    .bind(&data.email)
    .bind(&data.cargo)
    .bind(&data.sexo)
    .bind(data.nascimento)
    .bind(&data.telefone)
    .bind(data.salario)
    .execute(pool)
    .await?;
    let id = inserted_id(&result)?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Employee {id} vanished after insert")))
}

/// Replace every editable column; `None` when no row has `id`
pub async fn update(
    pool: &DbPool,
    id: i64,
    data: &EmployeeDraft,
) -> RepoResult<Option<Employee>> {
    sqlx::query(
        r#"UPDATE funcionarios
           SET nome = ?, email = ?, cargo = ?, sexo = ?, nascimento = ?, telefone = ?, salario = ?
           WHERE id = ?"#,
    )
    .bind(&data.nome)
    .bind(&data.email)
    .bind(&data.cargo)
    .bind(&data.sexo)
    .bind(data.nascimento)
    .bind(&data.telefone)
    .bind(data.salario)
    .bind(id)
    .execute(pool)
    .await?;

    // MySQL counts unchanged rows as unaffected; existence comes from the re-read
    find_by_id(pool, id).await
}

/// Hard delete; `false` when no row had `id`
pub async fn delete(pool: &DbPool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM funcionarios WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
