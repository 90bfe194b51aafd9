//! Client-side credential validation.
//!
//! Validation failures are resolved entirely here, before any network
//! call is issued.

use thiserror::Error;

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Form-input validation failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Email is not syntactically plausible
    #[error("Invalid email address")]
    InvalidEmail,

    /// Password shorter than the minimum
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Syntactic email check: a non-empty local part, one `@`, and a dotted
/// domain. Deliberately permissive; the advisory existence probe and the
/// provider are the real authorities.
pub fn email_is_valid(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return false;
    }
    true
}

/// Password length check.
pub fn password_is_valid(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
}

/// Validate a credential pair, reporting the first problem found.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if !email_is_valid(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !password_is_valid(password) {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
