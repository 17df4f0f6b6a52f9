//! Unified error codes for the employee directory
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so that clients can branch on the code
/// without parsing the (localized) message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid request (malformed body, wrong content type)
    InvalidRequest = 5,
    /// One or more fields have an invalid format
    InvalidFormat = 6,
    /// One or more required fields are missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee email already registered
    EmployeeEmailExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default user-facing message for this error code
    ///
    /// These strings are part of the HTTP contract: the mobile client shows
    /// them verbatim.
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidRequest => "Requisição inválida",
            ErrorCode::InvalidFormat => "Campos com formato inválido",
            ErrorCode::RequiredField => "Todos os campos são obrigatórios",

            // Auth
            ErrorCode::InvalidCredentials => "Credenciais inválidas",

            // Employee
            ErrorCode::EmployeeNotFound => "Funcionário não encontrado",
            ErrorCode::EmployeeEmailExists => "Este email já está cadastrado",

            // System
            ErrorCode::InternalError => "Erro interno do servidor",
            ErrorCode::DatabaseError => "Erro no banco de dados",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1002 => Ok(ErrorCode::InvalidCredentials),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeEmailExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::EmployeeEmailExists.code(), 8002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(ErrorCode::try_from(8001), Ok(ErrorCode::EmployeeNotFound));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::EmployeeEmailExists).unwrap();
        assert_eq!(json, "8002");

        let code: ErrorCode = serde_json::from_str("1002").unwrap();
        assert_eq!(code, ErrorCode::InvalidCredentials);

        assert!(serde_json::from_str::<ErrorCode>("0").is_err());
    }

    #[test]
    fn test_contract_messages() {
        assert_eq!(
            ErrorCode::RequiredField.message(),
            "Todos os campos são obrigatórios"
        );
        assert_eq!(
            ErrorCode::EmployeeNotFound.message(),
            "Funcionário não encontrado"
        );
        assert_eq!(
            ErrorCode::EmployeeEmailExists.message(),
            "Este email já está cadastrado"
        );
        assert_eq!(ErrorCode::InvalidCredentials.message(), "Credenciais inválidas");
    }
}
