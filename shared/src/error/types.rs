//! Error type and its HTTP rendering

use super::codes::ErrorCode;
use crate::response::ErrorBody;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable message (shown verbatim by the client)
/// - Optional structured details (e.g. the list of missing fields)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create an invalid request error (malformed body, bad content type)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest).with_detail("reason", msg.into())
    }

    /// Create an employee not found error
    pub fn employee_not_found() -> Self {
        Self::new(ErrorCode::EmployeeNotFound)
    }

    /// Email already registered (create)
    pub fn email_taken() -> Self {
        Self::new(ErrorCode::EmployeeEmailExists)
    }

    /// Email already registered for a different employee (update)
    pub fn email_taken_by_other() -> Self {
        Self::with_message(
            ErrorCode::EmployeeEmailExists,
            "Este email já está cadastrado para outro funcionário",
        )
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Faults render as `{error}`; everything else as `{code, message, details}`
        if status.is_server_error() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
            return (status, Json(ErrorBody::fault(self.message))).into_response();
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
