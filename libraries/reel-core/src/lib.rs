//! Reel Tracker Core
//!
//! Shared domain types, service traits, and error handling for the
//! Reel Tracker libraries.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `MovieList`, `MovieSummary`,
//!   `JournalEntry`, `AuthSession`, and their id newtypes
//! - **Service Traits**: `IdentityProvider`, `UserService`,
//!   `MovieService`, `JournalService` - the seams to the external
//!   backend, injected as `Arc<dyn Trait>` by the logic crates
//! - **Error Handling**: unified `ReelError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::{MovieList, UserId};
//!
//! let owner = UserId::generate();
//! let list = MovieList::new(owner, "Watch Later");
//! assert!(list.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{ReelError, Result};
pub use traits::{IdentityProvider, JournalService, MovieService, UserService};

pub use types::{
    AuthSession, EntryId, JournalEntry, ListId, ListKind, ListMember, MovieId, MovieList,
    MovieRef, MovieSummary, UserId, UserRecord,
};
