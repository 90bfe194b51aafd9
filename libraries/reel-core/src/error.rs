/// Core error types for Reel Tracker
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `ReelError`
pub type Result<T> = std::result::Result<T, ReelError>;

/// Core error type for Reel Tracker services
#[derive(Error, Debug)]
pub enum ReelError {
    /// Transport-level failure reaching an external service
    #[error("Network error: {0}")]
    Network(String),

    /// External service rejected the request
    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Credentials rejected by the identity provider
    #[error("Authentication failed")]
    AuthFailed,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl ReelError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a provider error
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
