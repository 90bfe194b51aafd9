//! Reel Tracker Backend Client
//!
//! HTTP client library for the Reel Tracker backend API.
//!
//! # Features
//!
//! - **Authentication**: email/password sign-in, federated (Google) token
//!   exchange, enumeration-safe password reset
//! - **Users**: profile records, profile-image updates, advisory
//!   email-existence checks
//! - **Movies**: batch resolution of movie ids into display summaries
//! - **Journal**: session-scoped watch-log retrieval
//!
//! # Example
//!
//! ```ignore
//! use reel_server_client::{BackendConfig, ReelServerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BackendConfig::new("https://api.reel.example.com");
//!     let client = ReelServerClient::new(config)?;
//!
//!     let session = client.sign_in_with_password("user@example.com", "secret").await?;
//!     let record = client.fetch_user_data(&session.user_id).await?;
//!     println!("{} has {} lists", record.user_name, record.lists.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod journal;
mod movies;
mod types;
mod users;

// Re-export main types
pub use client::ReelServerClient;
pub use error::{ClientError, Result};
pub use types::{
    BackendConfig, EmailExistsResponse, FederatedSignInRequest, PasswordResetRequest,
    SignInRequest, SignInResponse, UpdateProfileImageRequest,
};
