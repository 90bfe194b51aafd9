/// Journal (watch log) domain types
use crate::types::{EntryId, MovieId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged watch event.
///
/// Owned by the journal service; the source of truth for statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique entry identifier
    pub id: EntryId,

    /// Watched movie
    pub movie_id: MovieId,

    /// When the movie was watched
    pub watched_at: DateTime<Utc>,

    /// Rating out of 10, if the user left one
    #[serde(default)]
    pub rating: Option<f32>,
}

impl JournalEntry {
    /// Create an entry watched now.
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            id: EntryId::generate(),
            movie_id,
            watched_at: Utc::now(),
            rating: None,
        }
    }
}
