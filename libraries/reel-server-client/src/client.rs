//! Main Reel Tracker backend client.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::journal::JournalClient;
use crate::movies::MoviesClient;
use crate::types::BackendConfig;
use crate::users::UsersClient;
use async_trait::async_trait;
use reel_core::types::{AuthSession, JournalEntry, MovieId, MovieSummary, UserId, UserRecord};
use reel_core::{IdentityProvider, JournalService, MovieService, UserService};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// Main client for the Reel Tracker backend.
///
/// Covers all four external collaborators the app talks to: the identity
/// provider, the user service, the movie metadata API, and the journal
/// service. Implements the `reel-core` service traits so the session and
/// profile crates can take it as `Arc<dyn Trait>`.
///
/// # Example
///
/// ```ignore
/// use reel_server_client::{BackendConfig, ReelServerClient};
///
/// let config = BackendConfig::new("https://api.reel.example.com");
/// let client = ReelServerClient::new(config)?;
///
/// let session = client.sign_in_with_password("user@example.com", "secret").await?;
/// let record = client.fetch_user_data(&session.user_id).await?;
/// println!("{} has {} lists", record.user_name, record.lists.len());
/// ```
pub struct ReelServerClient {
    http: Client,
    config: Arc<RwLock<BackendConfig>>,
}

impl ReelServerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BackendConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = BackendConfig {
            url,
            access_token: config.access_token,
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("ReelTracker/{} (Web)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the backend URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client holds an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    /// Set the token directly (e.g., from a stored session).
    pub async fn set_token(&self, access_token: String) {
        let mut config = self.config.write().await;
        config.access_token = Some(access_token);
    }

    /// Clear the stored token (sign-out).
    pub async fn clear_token(&self) {
        let mut config = self.config.write().await;
        config.access_token = None;
        info!("Signed out");
    }

    /// Sign in with email and password.
    ///
    /// On success, the access token is stored for subsequent requests.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthSession> {
        let url = self.url().await;

        let auth_client = AuthClient::new(&self.http, &url);
        let session = auth_client.sign_in(email, password).await?;

        let mut config = self.config.write().await;
        config.access_token = Some(session.access_token.clone());

        Ok(session)
    }

    /// Exchange a federated provider token for a session.
    pub async fn sign_in_with_federated_token(&self, id_token: &str) -> Result<AuthSession> {
        let url = self.url().await;

        let auth_client = AuthClient::new(&self.http, &url);
        let session = auth_client.sign_in_federated(id_token).await?;

        let mut config = self.config.write().await;
        config.access_token = Some(session.access_token.clone());

        Ok(session)
    }

    /// Request a password-reset email.
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        let url = self.url().await;

        let auth_client = AuthClient::new(&self.http, &url);
        auth_client.send_password_reset(email).await
    }

    /// Fetch a user record using the stored token.
    pub async fn fetch_user_data(&self, user_id: &UserId) -> Result<UserRecord> {
        let config = self.config.read().await;
        let url = config.url.clone();
        let token = config.access_token.clone();
        drop(config);

        UsersClient::new(&self.http, &url, token.as_deref())
            .get_user_data(user_id)
            .await
    }

    /// Replace a user's profile image using the stored token.
    pub async fn set_profile_image(&self, user_id: &UserId, image_ref: &str) -> Result<()> {
        let config = self.config.read().await;
        let url = config.url.clone();
        let token = config.access_token.clone();
        drop(config);

        UsersClient::new(&self.http, &url, token.as_deref())
            .update_profile_image(user_id, image_ref)
            .await
    }

    /// Advisory email-existence check (reachable before sign-in).
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let url = self.url().await;

        UsersClient::new(&self.http, &url, None)
            .check_email_exists(email)
            .await
    }

    /// Resolve a batch of movie ids into display summaries.
    pub async fn fetch_movies(&self, ids: &[MovieId]) -> Result<Vec<MovieSummary>> {
        let url = self.url().await;

        MoviesClient::new(&self.http, &url).fetch_by_ids(ids).await
    }

    /// Fetch journal entries for an explicit session.
    pub async fn fetch_journal_entries(&self, session: &AuthSession) -> Result<Vec<JournalEntry>> {
        let url = self.url().await;

        JournalClient::new(&self.http, &url).get_entries(session).await
    }
}

// =============================================================================
// reel-core trait implementations
// =============================================================================

#[async_trait]
impl IdentityProvider for ReelServerClient {
    async fn sign_in(&self, email: &str, password: &str) -> reel_core::Result<AuthSession> {
        Ok(self.sign_in_with_password(email, password).await?)
    }

    async fn sign_in_federated(&self, id_token: &str) -> reel_core::Result<AuthSession> {
        Ok(self.sign_in_with_federated_token(id_token).await?)
    }

    async fn send_password_reset(&self, email: &str) -> reel_core::Result<()> {
        Ok(self.request_password_reset(email).await?)
    }
}

#[async_trait]
impl UserService for ReelServerClient {
    async fn get_user_data(&self, user_id: &UserId) -> reel_core::Result<UserRecord> {
        Ok(self.fetch_user_data(user_id).await?)
    }

    async fn update_profile_image(
        &self,
        user_id: &UserId,
        image_ref: &str,
    ) -> reel_core::Result<()> {
        Ok(self.set_profile_image(user_id, image_ref).await?)
    }

    async fn check_email_exists(&self, email: &str) -> reel_core::Result<bool> {
        Ok(self.email_exists(email).await?)
    }
}

#[async_trait]
impl MovieService for ReelServerClient {
    async fn fetch_movies_by_ids(&self, ids: &[MovieId]) -> reel_core::Result<Vec<MovieSummary>> {
        Ok(self.fetch_movies(ids).await?)
    }
}

#[async_trait]
impl JournalService for ReelServerClient {
    async fn get_journal_entries(
        &self,
        session: &AuthSession,
    ) -> reel_core::Result<Vec<JournalEntry>> {
        Ok(self.fetch_journal_entries(session).await?)
    }
}
