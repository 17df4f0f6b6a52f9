//! Response envelopes of the HTTP API
//!
//! Shared by the server (serialization) and the client (deserialization).

use crate::error::{AppError, ErrorCode};
use crate::models::{Employee, UserProfile};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// `{message}` - delete confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{message, funcionario}` - create and update results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeEnvelope {
    pub message: String,
    pub funcionario: Employee,
}

impl EmployeeEnvelope {
    pub fn created(funcionario: Employee) -> Self {
        Self {
            message: "Funcionário cadastrado com sucesso".to_string(),
            funcionario,
        }
    }

    pub fn updated(funcionario: Employee) -> Self {
        Self {
            message: "Funcionário atualizado com sucesso".to_string(),
            funcionario,
        }
    }
}

/// Login result
///
/// Success: `{success: true, user}`; failure: `{success: false, message}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn accepted(user: UserProfile) -> Self {
        Self {
            success: true,
            user: Some(user),
            message: None,
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            user: None,
            message: Some(ErrorCode::InvalidCredentials.message().to_string()),
        }
    }
}

/// Error body for every non-2xx response
///
/// Client errors carry `code`/`message`/`details`; server faults only carry
/// `error`. The client reads whichever is present. `code` stays a plain
/// number so that codes unknown to an older client still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Body for an unhandled fault: `{error: <message>}`
    pub fn fault(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Best message to show a user
    pub fn display_message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: Some(err.message.clone()),
            details: err.details.clone(),
            error: None,
        }
    }
}
