//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// A duplicate email is reported as 400 rather than 409; the mobile
    /// client treats both validation and conflict the same way.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            // 401 Unauthorized
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation, conflicts, malformed bodies)
            Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::EmployeeEmailExists => StatusCode::BAD_REQUEST,
        }
    }
}
