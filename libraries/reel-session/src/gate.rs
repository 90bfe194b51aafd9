//! Session gate: exchanges credentials for a session.

use crate::context::SessionContext;
use crate::form::SignInForm;
use crate::validate::{self, ValidationError};
use reel_core::types::AuthSession;
use reel_core::{IdentityProvider, ReelError, UserService};
use std::sync::Arc;
use tracing::{info, warn};

/// Errors surfaced by the gate.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Credentials rejected. Deliberately generic: never says whether the
    /// account exists.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Input rejected before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Provider or network failure
    #[error("Provider unavailable: {0}")]
    Provider(String),
}

/// Result of a federated sign-in attempt.
///
/// Both variants carry the acquired session; the split only drives UX
/// branching. The underlying existence check is advisory and racy, so
/// callers must treat this as a hint, never as authorization.
#[derive(Debug, Clone)]
pub enum FederatedOutcome {
    /// Account already known: proceed to the app
    SignedIn(AuthSession),
    /// Account unknown: route through registration
    NeedsRegistration(AuthSession),
}

/// Gate over the identity provider and the user service.
pub struct SessionGate {
    identity: Arc<dyn IdentityProvider>,
    users: Arc<dyn UserService>,
}

impl SessionGate {
    /// Create a gate over the given services.
    pub fn new(identity: Arc<dyn IdentityProvider>, users: Arc<dyn UserService>) -> Self {
        Self { identity, users }
    }

    /// Sign in with the form's credentials.
    ///
    /// Validation runs first; nothing reaches the network on malformed
    /// input. On success the form is cleared and the session acquired
    /// into `ctx`. On rejection the password field is cleared and a
    /// single generic failure is reported.
    pub async fn sign_in(
        &self,
        form: &mut SignInForm,
        ctx: &mut SessionContext,
    ) -> Result<(), GateError> {
        validate::validate_credentials(form.email(), form.password())?;

        match self.identity.sign_in(form.email(), form.password()).await {
            Ok(session) => {
                info!(user_id = %session.user_id, "Signed in");
                form.clear();
                ctx.acquire(session);
                Ok(())
            }
            Err(ReelError::AuthFailed) => {
                warn!("Sign-in rejected");
                form.clear_password();
                Err(GateError::InvalidCredentials)
            }
            Err(e) => {
                warn!(error = %e, "Sign-in failed");
                Err(GateError::Provider(e.to_string()))
            }
        }
    }

    /// Fire-and-forget password reset.
    ///
    /// Reports success even when the provider does not know the email;
    /// only transport/provider outages surface as errors.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), GateError> {
        if !validate::email_is_valid(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        match self.identity.send_password_reset(email).await {
            Ok(()) => Ok(()),
            // Never reveal that the account does not exist.
            Err(ReelError::NotFound { .. } | ReelError::UserNotFound(_)) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Password reset request failed");
                Err(GateError::Provider(e.to_string()))
            }
        }
    }

    /// Google-federated sign-in.
    ///
    /// Exchanges the provider token for a session, then branches on the
    /// advisory existence check: known accounts proceed, unknown accounts
    /// are routed to registration.
    pub async fn sign_in_with_google(
        &self,
        id_token: &str,
        ctx: &mut SessionContext,
    ) -> Result<FederatedOutcome, GateError> {
        let session = match self.identity.sign_in_federated(id_token).await {
            Ok(session) => session,
            Err(ReelError::AuthFailed) => return Err(GateError::InvalidCredentials),
            Err(e) => return Err(GateError::Provider(e.to_string())),
        };

        let known = self
            .users
            .check_email_exists(&session.email)
            .await
            .map_err(|e| GateError::Provider(e.to_string()))?;

        ctx.acquire(session.clone());

        if known {
            info!(user_id = %session.user_id, "Federated sign-in: existing account");
            Ok(FederatedOutcome::SignedIn(session))
        } else {
            info!(user_id = %session.user_id, "Federated sign-in: routing to registration");
            Ok(FederatedOutcome::NeedsRegistration(session))
        }
    }

    /// Release the held session.
    pub fn sign_out(&self, ctx: &mut SessionContext) -> Option<AuthSession> {
        let released = ctx.release();
        if released.is_some() {
            info!("Signed out");
        }
        released
    }
}
