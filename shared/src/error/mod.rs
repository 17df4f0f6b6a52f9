//! Unified error system for the employee directory
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::RequiredField)
//!     .with_detail("missing", vec!["nome"]);
//! assert_eq!(err.message, "Todos os campos são obrigatórios");
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::AppError;
