/// Movie list domain types
use crate::types::{EntryId, ListId, MovieId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a list belongs to a single user or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    /// Personal list, wire value `"user"`
    #[serde(rename = "user")]
    Personal,
    /// Group list, wire value `"group"`
    #[serde(rename = "group")]
    Group,
}

impl ListKind {
    /// Convert to the wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Personal => "user",
            ListKind::Group => "group",
        }
    }

    /// Parse from the wire string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(ListKind::Personal),
            "group" => Some(ListKind::Group),
            _ => None,
        }
    }
}

/// Membership record on a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMember {
    /// Member user ID
    pub user_id: UserId,

    /// Whether this member created the list
    pub is_author: bool,
}

/// A link from a list entry to a movie.
///
/// Exists only inside a [`MovieList`]; the entry id distinguishes
/// duplicate occurrences of the same movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRef {
    /// Movie identifier in the metadata API
    pub movie_id: MovieId,

    /// List-entry identifier
    #[serde(rename = "id")]
    pub entry_id: EntryId,
}

/// A named, ordered collection of movie references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieList {
    /// Unique list identifier
    #[serde(rename = "list_id")]
    pub id: ListId,

    /// List name
    pub name: String,

    /// Personal or group list
    #[serde(rename = "list_type")]
    pub kind: ListKind,

    /// Ordered movie references
    #[serde(default)]
    pub movies: Vec<MovieRef>,

    /// Membership records
    #[serde(default)]
    pub members: Vec<ListMember>,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Creation timestamp
    #[serde(rename = "date_created")]
    pub created_at: DateTime<Utc>,
}

impl MovieList {
    /// Create a new personal list authored by `owner`.
    pub fn new(owner: UserId, name: impl Into<String>) -> Self {
        Self {
            id: ListId::generate(),
            name: name.into(),
            kind: ListKind::Personal,
            movies: Vec::new(),
            members: vec![ListMember {
                user_id: owner,
                is_author: true,
            }],
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Movie identifiers in list order.
    pub fn movie_ids(&self) -> Vec<MovieId> {
        self.movies.iter().map(|m| m.movie_id.clone()).collect()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
