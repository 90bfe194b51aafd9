//! Reel Tracker Profile
//!
//! Assembles the data behind the profile dashboard: the full user
//! record, the resolved movie preview for the currently selected list,
//! and monthly watch statistics derived from the journal.
//!
//! # Example
//!
//! ```ignore
//! use reel_profile::ProfileAggregator;
//!
//! let aggregator = ProfileAggregator::new(users, movies, journal);
//! let mut dashboard = aggregator.load(&session).await?;
//!
//! println!("{} watches logged", dashboard.stats().total);
//! aggregator.select_list(&mut dashboard, 1).await;
//! for movie in dashboard.preview() {
//!     println!("{}", movie.title);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregator;
mod error;
mod stats;

pub use aggregator::{ProfileAggregator, ProfileDashboard, SelectionTicket};
pub use error::{ProfileError, Result};
pub use stats::{calculate_stats, MonthlyStat, WatchStats};
