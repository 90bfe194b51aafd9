//! Types for Reel Tracker backend API requests and responses.

use serde::{Deserialize, Serialize};

/// Configuration for connecting to the Reel Tracker backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the backend (e.g., "https://api.reel.example.com")
    pub url: String,
    /// Current access token (if authenticated)
    pub access_token: Option<String>,
}

impl BackendConfig {
    /// Create a new backend config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
        }
    }

    /// Create a config with an existing token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: Some(access_token.into()),
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Request body for federated (Google) sign-in.
#[derive(Debug, Serialize)]
pub struct FederatedSignInRequest {
    pub id_token: String,
}

/// Response from successful sign-in (either flavor).
#[derive(Debug, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub user_id: String,
    pub email: String,
}

/// Request body for password reset.
#[derive(Debug, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

// =============================================================================
// User Types
// =============================================================================

/// Response from the email-existence advisory endpoint.
#[derive(Debug, Deserialize)]
pub struct EmailExistsResponse {
    pub exists: bool,
}

/// Request body for profile image updates.
#[derive(Debug, Serialize)]
pub struct UpdateProfileImageRequest {
    pub profile_image: String,
}
