//! Reel Tracker Session Gate
//!
//! Exchanges email/password credentials (or a federated Google token)
//! for an authenticated session, with the UI-facing helpers around it:
//! client-side validation, the debounced email-existence probe, and the
//! explicit session lifecycle.
//!
//! # Example
//!
//! ```ignore
//! use reel_session::{SessionContext, SessionGate, SignInForm};
//!
//! let gate = SessionGate::new(identity, users);
//! let mut ctx = SessionContext::new();
//!
//! let mut form = SignInForm::new();
//! form.set_email("user@example.com");
//! form.set_password("secret1");
//!
//! gate.sign_in(&mut form, &mut ctx).await?;
//! assert!(ctx.is_authenticated());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod form;
mod gate;
mod probe;
mod validate;

pub use context::SessionContext;
pub use form::SignInForm;
pub use gate::{FederatedOutcome, GateError, SessionGate};
pub use probe::{EmailHint, EmailProbe, DEFAULT_QUIET_PERIOD};
pub use validate::{
    email_is_valid, password_is_valid, validate_credentials, ValidationError, PASSWORD_MIN_LEN,
};
