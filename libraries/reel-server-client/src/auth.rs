//! Identity-provider endpoints for the Reel Tracker backend.

use crate::error::{ClientError, Result};
use crate::types::{FederatedSignInRequest, PasswordResetRequest, SignInRequest, SignInResponse};
use reel_core::types::{AuthSession, UserId};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client for the Reel Tracker backend.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Sign in with email and password.
    ///
    /// A 401 maps to a single generic failure: the backend does not say
    /// whether the account exists.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession> {
        let url = format!("{}/api/auth/login", self.base_url);
        debug!(url = %url, email = %email, "Attempting sign-in");

        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let body: SignInResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse sign-in response: {}", e))
            })?;

            info!(user_id = %body.user_id, "Sign-in successful");

            Ok(AuthSession::new(
                UserId::new(body.user_id),
                body.email,
                body.access_token,
            ))
        } else if status.as_u16() == 401 {
            warn!(status = %status, "Sign-in rejected");
            Err(ClientError::AuthFailed(
                "Incorrect email or password".to_string(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Exchange a federated provider (Google) ID token for a session.
    pub async fn sign_in_federated(&self, id_token: &str) -> Result<AuthSession> {
        let url = format!("{}/api/auth/federated/google", self.base_url);
        debug!(url = %url, "Exchanging federated token");

        let request = FederatedSignInRequest {
            id_token: id_token.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let body: SignInResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse federated response: {}", e))
            })?;

            info!(user_id = %body.user_id, "Federated sign-in successful");

            Ok(AuthSession::new(
                UserId::new(body.user_id),
                body.email,
                body.access_token,
            ))
        } else if status.as_u16() == 401 {
            warn!(status = %status, "Federated token rejected");
            Err(ClientError::AuthFailed("Provider token rejected".to_string()))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Request a password-reset email.
    ///
    /// A 404 is treated as success so the caller learns nothing about
    /// whether the email has an account.
    pub async fn send_password_reset(&self, email: &str) -> Result<()> {
        let url = format!("{}/api/auth/password-reset", self.base_url);
        debug!(url = %url, "Requesting password reset");

        let request = PasswordResetRequest {
            email: email.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() || status.as_u16() == 404 {
            debug!("Password reset acknowledged");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
