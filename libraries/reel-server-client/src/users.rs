//! User-service endpoints.

use crate::error::{ClientError, Result};
use crate::types::{EmailExistsResponse, UpdateProfileImageRequest};
use reel_core::types::{UserId, UserRecord};
use reqwest::Client;
use tracing::{debug, warn};

/// User-service client.
///
/// `get_user_data` and `update_profile_image` need a token; the
/// email-existence advisory is reachable before sign-in.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    access_token: Option<&'a str>,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    fn token(&self) -> Result<&'a str> {
        self.access_token.ok_or(ClientError::AuthRequired)
    }

    /// Fetch the full user record.
    pub async fn get_user_data(&self, user_id: &UserId) -> Result<UserRecord> {
        let token = self.token()?;
        let url = format!("{}/api/users/{}", self.base_url, user_id);
        debug!(url = %url, "Fetching user record");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let record: UserRecord = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user record: {}", e))
            })?;
            Ok(record)
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                entity: "User".to_string(),
                id: user_id.to_string(),
            })
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Replace the user's profile image reference.
    pub async fn update_profile_image(&self, user_id: &UserId, image_ref: &str) -> Result<()> {
        let token = self.token()?;
        let url = format!("{}/api/users/{}/profile-image", self.base_url, user_id);
        debug!(url = %url, "Updating profile image");

        let request = UpdateProfileImageRequest {
            profile_image: image_ref.to_string(),
        };

        let response = self
            .http
            .patch(&url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Profile image update rejected");
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Advisory check: does this email already have an account?
    pub async fn check_email_exists(&self, email: &str) -> Result<bool> {
        let url = format!("{}/api/users/email-exists", self.base_url);
        debug!(url = %url, "Checking email existence");

        let response = self
            .http
            .get(&url)
            .query(&[("email", email)])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let body: EmailExistsResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse email-exists response: {}", e))
            })?;
            Ok(body.exists)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
