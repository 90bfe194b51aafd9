//! Journal-service endpoints.

use crate::error::{ClientError, Result};
use reel_core::types::{AuthSession, JournalEntry};
use reqwest::Client;
use tracing::debug;

/// Journal-service client.
///
/// Every call is session-scoped: the bearer token comes from the
/// [`AuthSession`] passed in, never from ambient client state.
pub struct JournalClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> JournalClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch all journal entries for the session's user.
    pub async fn get_entries(&self, session: &AuthSession) -> Result<Vec<JournalEntry>> {
        let url = format!("{}/api/journal/entries", self.base_url);
        debug!(url = %url, user_id = %session.user_id, "Fetching journal entries");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&session.access_token)
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
            let entries: Vec<JournalEntry> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse journal entries: {}", e))
            })?;
            Ok(entries)
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
