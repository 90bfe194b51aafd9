/// Authenticated session type
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated identity issued by the external identity provider.
///
/// Session-scoped calls (the journal service in particular) take this
/// explicitly instead of reading ambient provider state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Authenticated user
    pub user_id: UserId,

    /// Account email as reported by the provider
    pub email: String,

    /// Bearer token for session-scoped calls
    pub access_token: String,

    /// When the session was acquired
    pub acquired_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a session acquired now.
    pub fn new(
        user_id: UserId,
        email: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            email: email.into(),
            access_token: access_token.into(),
            acquired_at: Utc::now(),
        }
    }
}
