//! Debounced advisory email-existence probe.
//!
//! Every keystroke cancels the previously scheduled check and starts a
//! new one; only after the quiet period elapses with no further input is
//! the user service asked. Superseded checks are discarded, never queued.

use crate::validate::email_is_valid;
use reel_core::UserService;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Quiet interval observed by the sign-in page.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Current advisory hint for the candidate email.
///
/// Strictly a UX hint: it may be stale the moment it is produced and must
/// never be used as an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailHint {
    /// No verdict (empty/invalid input, or the check failed)
    Unknown,
    /// A check is scheduled or in flight
    Checking,
    /// The email already has an account
    Exists,
    /// The email has no account
    NotRegistered,
}

/// Debounced email-existence checker.
///
/// Each [`input`](EmailProbe::input) invalidates the previous scheduled
/// task before scheduling a new one; results are published on a watch
/// channel only while their generation is still current.
pub struct EmailProbe {
    users: Arc<dyn UserService>,
    quiet_period: Duration,
    generation: Arc<AtomicU64>,
    hint_tx: Arc<watch::Sender<EmailHint>>,
    task: Option<JoinHandle<()>>,
}

impl EmailProbe {
    /// Create a probe with the default 500 ms quiet period.
    pub fn new(users: Arc<dyn UserService>) -> (Self, watch::Receiver<EmailHint>) {
        Self::with_quiet_period(users, DEFAULT_QUIET_PERIOD)
    }

    /// Create a probe with a custom quiet period.
    pub fn with_quiet_period(
        users: Arc<dyn UserService>,
        quiet_period: Duration,
    ) -> (Self, watch::Receiver<EmailHint>) {
        let (hint_tx, hint_rx) = watch::channel(EmailHint::Unknown);
        (
            Self {
                users,
                quiet_period,
                generation: Arc::new(AtomicU64::new(0)),
                hint_tx: Arc::new(hint_tx),
                task: None,
            },
            hint_rx,
        )
    }

    /// Subscribe another hint receiver.
    pub fn subscribe(&self) -> watch::Receiver<EmailHint> {
        self.hint_tx.subscribe()
    }

    /// Feed the current email input.
    ///
    /// Cancels any pending check. A syntactically invalid candidate
    /// resolves to [`EmailHint::Unknown`] immediately without touching
    /// the network.
    pub fn input(&mut self, email: &str) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if !email_is_valid(email) {
            let _ = self.hint_tx.send(EmailHint::Unknown);
            return;
        }

        let _ = self.hint_tx.send(EmailHint::Checking);

        let users = Arc::clone(&self.users);
        let current = Arc::clone(&self.generation);
        let hint_tx = Arc::clone(&self.hint_tx);
        let quiet_period = self.quiet_period;
        let email = email.to_string();

        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;

            // Input may have moved on while we slept.
            if current.load(Ordering::SeqCst) != generation {
                return;
            }

            debug!(email = %email, "Probing email existence");
            let hint = match users.check_email_exists(&email).await {
                Ok(true) => EmailHint::Exists,
                Ok(false) => EmailHint::NotRegistered,
                Err(e) => {
                    warn!(error = %e, "Email existence check failed");
                    EmailHint::Unknown
                }
            };

            if current.load(Ordering::SeqCst) == generation {
                let _ = hint_tx.send(hint);
            }
        }));
    }

    /// Cancel any pending check and reset the hint.
    pub fn reset(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        let _ = self.hint_tx.send(EmailHint::Unknown);
    }
}

impl Drop for EmailProbe {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
