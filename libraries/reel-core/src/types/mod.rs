//! Domain types shared across the Reel Tracker libraries.

mod ids;
mod journal;
mod list;
mod movie;
mod session;
mod user;

pub use ids::{EntryId, ListId, MovieId, UserId};
pub use journal::JournalEntry;
pub use list::{ListKind, ListMember, MovieList, MovieRef};
pub use movie::{MovieSummary, POSTER_BASE_URL};
pub use session::AuthSession;
pub use user::UserRecord;
