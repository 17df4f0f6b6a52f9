//! Client error types

use thiserror::Error;

/// Shown when the server could not be reached or answered nonsense
pub const CONNECTION_FAILED: &str = "Não foi possível conectar ao servidor";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("<no message>"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message sent by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text to put in front of a user: the server message verbatim, or the
    /// generic connection failure
    pub fn user_message(&self) -> &str {
        self.server_message().unwrap_or(CONNECTION_FAILED)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err = ClientError::Api {
            status: 400,
            message: Some("Este email já está cadastrado".into()),
        };
        assert_eq!(err.user_message(), "Este email já está cadastrado");
        assert_eq!(err.status(), Some(400));

        let err = ClientError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(), CONNECTION_FAILED);

        let err = ClientError::InvalidResponse("truncated".into());
        assert_eq!(err.user_message(), CONNECTION_FAILED);
        assert_eq!(err.status(), None);
    }
}
