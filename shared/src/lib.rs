//! Shared types for the employee directory
//!
//! Wire models, response envelopes and the unified error system used by
//! both `funcionarios-server` and `funcionarios-client`.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{AppError, ErrorCode};
pub use models::{Employee, EmployeeDraft, EmployeeInput, LoginRequest, User, UserProfile};
pub use response::{EmployeeEnvelope, ErrorBody, LoginResponse, MessageResponse};
