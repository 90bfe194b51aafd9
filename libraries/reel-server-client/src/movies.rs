//! Movie-metadata endpoints.

use crate::error::{ClientError, Result};
use reel_core::types::{MovieId, MovieSummary};
use reqwest::Client;
use tracing::debug;

/// Movie-metadata client.
///
/// The batch endpoint makes no ordering promise; callers that need list
/// order must reorder the response themselves.
pub struct MoviesClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> MoviesClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Resolve a batch of movie ids into display summaries.
    ///
    /// An empty batch returns an empty vector without issuing a request.
    pub async fn fetch_by_ids(&self, ids: &[MovieId]) -> Result<Vec<MovieSummary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/movies", self.base_url);
        let joined = ids
            .iter()
            .map(MovieId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        debug!(url = %url, count = ids.len(), "Fetching movie batch");

        let response = self
            .http
            .get(&url)
            .query(&[("ids", joined.as_str())])
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
            let movies: Vec<MovieSummary> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse movie batch: {}", e))
            })?;
            Ok(movies)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
