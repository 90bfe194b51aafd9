/// Display-ready movie metadata
use crate::types::MovieId;
use serde::{Deserialize, Serialize};

/// Base URL for poster images served by the metadata provider.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Display-ready movie metadata, fetched on demand by identifier batch.
///
/// Never persisted locally; the set shown on a profile always corresponds
/// to the references of the currently selected list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Movie identifier
    pub id: MovieId,

    /// Title
    pub title: String,

    /// Poster image path (relative, provider-issued)
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl MovieSummary {
    /// Full poster URL at the given width preset (e.g. `"w92"`).
    ///
    /// Returns `None` when the movie has no poster.
    pub fn poster_url(&self, width: &str) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{}/{}{}", POSTER_BASE_URL, width, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_url_joins_base_width_and_path() {
        let movie = MovieSummary {
            id: MovieId::new("m-1"),
            title: "Heat".to_string(),
            poster_path: Some("/heat.jpg".to_string()),
        };

        assert_eq!(
            movie.poster_url("w92").as_deref(),
            Some("https://image.tmdb.org/t/p/w92/heat.jpg")
        );
    }

    #[test]
    fn poster_url_none_without_poster() {
        let movie = MovieSummary {
            id: MovieId::new("m-1"),
            title: "Heat".to_string(),
            poster_path: None,
        };

        assert!(movie.poster_url("w92").is_none());
    }
}
