//! Explicit session lifecycle.

use reel_core::types::AuthSession;

/// Holds the session for the signed-in user, if any.
///
/// Replaces the original app's ambient provider state: the session is
/// acquired at sign-in, passed explicitly into session-scoped calls, and
/// released at sign-out.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current: Option<AuthSession>,
}

impl SessionContext {
    /// Empty (signed-out) context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly acquired session, replacing any previous one.
    pub fn acquire(&mut self, session: AuthSession) {
        self.current = Some(session);
    }

    /// Release the session, returning it if one was held.
    pub fn release(&mut self) -> Option<AuthSession> {
        self.current.take()
    }

    /// The current session, if signed in.
    pub fn current(&self) -> Option<&AuthSession> {
        self.current.as_ref()
    }

    /// Whether a session is held.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::types::UserId;

    #[test]
    fn acquire_release_lifecycle() {
        let mut ctx = SessionContext::new();
        assert!(!ctx.is_authenticated());

        ctx.acquire(AuthSession::new(UserId::new("u-1"), "a@b.com", "tok"));
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.current().unwrap().user_id, UserId::new("u-1"));

        let released = ctx.release().expect("session was held");
        assert_eq!(released.access_token, "tok");
        assert!(!ctx.is_authenticated());
        assert!(ctx.release().is_none());
    }
}
