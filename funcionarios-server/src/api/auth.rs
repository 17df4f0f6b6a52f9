//! Login endpoint

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::error::AppError;
use shared::models::LoginRequest;
use shared::response::LoginResponse;

use super::json_body;
use crate::db::repository::user;
use crate::state::AppState;
use crate::util::verify_password;

/// POST /api/login
///
/// No session or token is issued, and failed attempts are not throttled.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LoginResponse>), AppError> {
    let req = json_body(payload)?;
    tracing::info!(email = %req.email, "Login attempt");

    let account = user::find_by_email(&state.pool, &req.email).await?;

    match account {
        Some(account) if verify_password(&req.password, &account.senha) => {
            tracing::info!(user_id = account.id, "Login succeeded");
            Ok((
                StatusCode::OK,
                Json(LoginResponse::accepted(account.profile())),
            ))
        }
        _ => {
            tracing::info!(email = %req.email, "Login failed");
            Ok((StatusCode::UNAUTHORIZED, Json(LoginResponse::rejected())))
        }
    }
}
