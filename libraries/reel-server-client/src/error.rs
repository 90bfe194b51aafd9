//! Error types for the Reel backend client.

use reel_core::ReelError;
use thiserror::Error;

/// Errors that can occur when talking to the Reel Tracker backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication required but no token available
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed (invalid credentials or expired token)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Requested entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid backend URL
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for backend client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for ReelError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => ReelError::Network(e.to_string()),
            ClientError::ServerUnreachable(msg) => ReelError::Network(msg),
            ClientError::ServerError { status, message } => ReelError::Provider { status, message },
            ClientError::AuthRequired | ClientError::AuthFailed(_) => ReelError::AuthFailed,
            ClientError::NotFound { entity, id } => ReelError::NotFound { entity, id },
            ClientError::InvalidUrl(msg) => ReelError::InvalidInput(msg),
            ClientError::ParseError(msg) => ReelError::Other(msg),
        }
    }
}
