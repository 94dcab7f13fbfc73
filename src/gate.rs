//! Route Gate
//!
//! Decides, on every render, whether a guarded view may be shown.

use crate::routes::Route;
use crate::session::SessionStore;

/// What a guarded view requires of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Signed-in users only; others go to sign-in
    Authenticated,
    /// Signed-out users only; others go home
    Anonymous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    /// Navigate away, replacing the current history entry
    Redirect(Route),
}

impl Guard {
    pub fn decide<S: SessionStore + ?Sized>(self, session: &S) -> GateDecision {
        let signed_in = session.is_authenticated();
        match (self, signed_in) {
            (Guard::Authenticated, false) => GateDecision::Redirect(Route::SignIn),
            (Guard::Anonymous, true) => GateDecision::Redirect(Route::Home),
            _ => GateDecision::Render,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;

    #[test]
    fn test_require_auth() {
        let session = MemorySession::new();
        assert_eq!(Guard::Authenticated.decide(&session), GateDecision::Redirect(Route::SignIn));

        session.set("tok1");
        assert_eq!(Guard::Authenticated.decide(&session), GateDecision::Render);
    }

    #[test]
    fn test_require_anonymous() {
        let session = MemorySession::new();
        assert_eq!(Guard::Anonymous.decide(&session), GateDecision::Render);

        session.set("tok1");
        assert_eq!(Guard::Anonymous.decide(&session), GateDecision::Redirect(Route::Home));
    }

    #[test]
    fn test_decision_follows_current_session_only() {
        let session = MemorySession::with_token("tok1");
        assert_eq!(Guard::Authenticated.decide(&session), GateDecision::Render);

        // logout from a sibling view
        session.clear();
        assert_eq!(Guard::Authenticated.decide(&session), GateDecision::Redirect(Route::SignIn));
        assert_eq!(Guard::Anonymous.decide(&session), GateDecision::Render);

        session.set("tok2");
        assert_eq!(Guard::Authenticated.decide(&session), GateDecision::Render);
    }
}
