//! Employee CRUD handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::error::AppError;
use shared::models::{Employee, EmployeeInput};
use shared::response::{EmployeeEnvelope, MessageResponse};

use super::{ApiResult, json_body};
use crate::db::repository::{RepoError, employee};
use crate::state::AppState;

/// Path ids that are not integers match no row
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::employee_not_found())
}

/// GET /api/funcionarios
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let employees = employee::find_all(&state.pool).await?;
    tracing::debug!(count = employees.len(), "Listed employees");
    Ok(Json(employees))
}

/// GET /api/funcionarios/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Employee> {
    let id = parse_id(&id)?;
    let found = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(AppError::employee_not_found)?;
    Ok(Json(found))
}

/// POST /api/funcionarios/novo
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeEnvelope>), AppError> {
    let draft = json_body(payload)?.validate()?;

    if employee::email_in_use(&state.pool, &draft.email, None).await? {
        tracing::info!(email = %draft.email, "Email already registered");
        return Err(AppError::email_taken());
    }

    // A concurrent insert can still win the race; the UNIQUE index rejects ours
    let created = employee::create(&state.pool, &draft).await?;
    tracing::info!(id = created.id, "Employee created");

    Ok((StatusCode::CREATED, Json(EmployeeEnvelope::created(created))))
}

/// PUT /api/funcionarios/editar/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<EmployeeEnvelope> {
    let draft = json_body(payload)?.validate()?;
    let id = parse_id(&id)?;

    if !employee::exists(&state.pool, id).await? {
        return Err(AppError::employee_not_found());
    }

    if employee::email_in_use(&state.pool, &draft.email, Some(id)).await? {
        tracing::info!(id, email = %draft.email, "Email registered for another employee");
        return Err(AppError::email_taken_by_other());
    }

    let updated = employee::update(&state.pool, id, &draft)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::email_taken_by_other(),
            other => other.into(),
        })?
        .ok_or_else(AppError::employee_not_found)?;
    tracing::info!(id, "Employee updated");

    Ok(Json(EmployeeEnvelope::updated(updated)))
}

/// DELETE /api/funcionarios/excluir/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_id(&id)?;

    if !employee::exists(&state.pool, id).await? {
        return Err(AppError::employee_not_found());
    }

    // Deleted concurrently between the check and here: same outcome as absent
    if !employee::delete(&state.pool, id).await? {
        return Err(AppError::employee_not_found());
    }
    tracing::info!(id, "Employee deleted");

    Ok(Json(MessageResponse::new("Funcionário excluído com sucesso")))
}
