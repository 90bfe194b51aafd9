/// Service seams for the external collaborators
use crate::error::Result;
use crate::types::{AuthSession, JournalEntry, MovieId, MovieSummary, UserId, UserRecord};
use async_trait::async_trait;

/// External identity provider.
///
/// Implementers exchange credentials (or a federated provider token) for
/// an [`AuthSession`]. Rejections must not distinguish an unknown account
/// from a wrong password.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession>;

    /// Exchange a federated provider token (Google) for a session.
    async fn sign_in_federated(&self, id_token: &str) -> Result<AuthSession>;

    /// Request a password-reset email.
    ///
    /// Providers are expected not to reveal whether the email has an
    /// account.
    async fn send_password_reset(&self, email: &str) -> Result<()>;
}

/// User service.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetch the full user record.
    async fn get_user_data(&self, user_id: &UserId) -> Result<UserRecord>;

    /// Replace the user's profile image reference.
    async fn update_profile_image(&self, user_id: &UserId, image_ref: &str) -> Result<()>;

    /// Advisory check: does this email already have an account?
    ///
    /// Non-authoritative and subject to races with concurrent signups;
    /// used only to shape UI behavior.
    async fn check_email_exists(&self, email: &str) -> Result<bool>;
}

/// Movie metadata service.
#[async_trait]
pub trait MovieService: Send + Sync {
    /// Resolve a batch of movie ids into display summaries.
    ///
    /// Response order is not guaranteed to match the input order.
    async fn fetch_movies_by_ids(&self, ids: &[MovieId]) -> Result<Vec<MovieSummary>>;
}

/// Journal (watch log) service.
#[async_trait]
pub trait JournalService: Send + Sync {
    /// Fetch all journal entries for the session's user.
    async fn get_journal_entries(&self, session: &AuthSession) -> Result<Vec<JournalEntry>>;
}
