/// User account domain type
use crate::types::{MovieList, UserId};
use serde::{Deserialize, Serialize};

/// A registered account, as returned by the user service.
///
/// Lists are referenced collections owned by (or shared with) the user;
/// they are carried inline on the record but resolved to full movie
/// metadata separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub user_name: String,

    /// Account email
    pub email: String,

    /// Age, if the user provided one
    #[serde(default)]
    pub age: Option<u8>,

    /// Earned badge names
    #[serde(default)]
    pub badges: Vec<String>,

    /// Group memberships (group identifiers)
    #[serde(default)]
    pub groups: Vec<String>,

    /// Friend user identifiers
    #[serde(default)]
    pub friends: Vec<UserId>,

    /// Movie lists visible on the profile, in display order
    #[serde(default)]
    pub lists: Vec<MovieList>,

    /// Favorite directors, free-form names
    #[serde(default)]
    pub favorite_directors: Vec<String>,

    /// Favorite actors, free-form names
    #[serde(default)]
    pub favorite_actors: Vec<String>,

    /// Profile image reference (avatar URL or asset key)
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl UserRecord {
    /// Look up a list by display index.
    pub fn list_at(&self, index: usize) -> Option<&MovieList> {
        self.lists.get(index)
    }
}
