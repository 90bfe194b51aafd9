//! Sign-in form state.

use crate::probe::EmailHint;
use crate::validate::{email_is_valid, password_is_valid};

/// Held email/password state for the sign-in screen.
///
/// Cleared wholesale after a successful sign-in; only the password is
/// cleared after a rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    email: String,
    password: String,
}

impl SignInForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current email input.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current password input.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replace the email input.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replace the password input.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Clear both fields.
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
    }

    /// Clear only the password field.
    pub fn clear_password(&mut self) {
        self.password.clear();
    }

    /// Whether submission is enabled for the current advisory hint.
    ///
    /// Requires a syntactically valid email, a long-enough password, and
    /// a positive existence hint.
    pub fn can_submit(&self, hint: EmailHint) -> bool {
        hint == EmailHint::Exists
            && email_is_valid(&self.email)
            && password_is_valid(&self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, password: &str) -> SignInForm {
        let mut form = SignInForm::new();
        form.set_email(email);
        form.set_password(password);
        form
    }

    #[test]
    fn submit_requires_hint_and_valid_password() {
        let form = filled("user@example.com", "123456");
        assert!(form.can_submit(EmailHint::Exists));
        assert!(!form.can_submit(EmailHint::Checking));
        assert!(!form.can_submit(EmailHint::NotRegistered));
        assert!(!form.can_submit(EmailHint::Unknown));

        // Positive hint alone is not enough with a short password.
        let short = filled("user@example.com", "12345");
        assert!(!short.can_submit(EmailHint::Exists));
    }

    #[test]
    fn clear_password_keeps_email() {
        let mut form = filled("user@example.com", "123456");
        form.clear_password();
        assert_eq!(form.email(), "user@example.com");
        assert_eq!(form.password(), "");
    }

    #[test]
    fn clear_empties_both_fields() {
        let mut form = filled("user@example.com", "123456");
        form.clear();
        assert_eq!(form, SignInForm::new());
    }
}
