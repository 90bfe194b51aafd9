//! Error types for profile assembly.

use reel_core::ReelError;
use thiserror::Error;

/// Errors surfaced while assembling or updating a profile dashboard.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Primary data (user record or journal) could not be fetched.
    /// Fatal for the view: nothing partial is shown.
    #[error("Profile data unavailable: {0}")]
    NoData(#[source] ReelError),

    /// The profile-image update was rejected; the local record is
    /// untouched.
    #[error("Profile image update failed: {0}")]
    ImageUpdate(#[source] ReelError),
}

/// Result type for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
