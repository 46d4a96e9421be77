//! Route Guard Decisions
//!
//! Pure render-or-redirect logic; the UI re-runs it whenever the session
//! changes and hands redirects to the router.

use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVariant {
    /// Any signed-in identity may pass
    Authenticated,
    /// Only identities flagged as admin may pass
    AdminOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Dashboard,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Dashboard => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity still resolving; show a placeholder
    Checking,
    Render,
    Redirect(RedirectTarget),
}

pub fn evaluate(variant: GuardVariant, session: &SessionState) -> GuardDecision {
    match variant {
        GuardVariant::Authenticated => {
            if session.is_loading() {
                GuardDecision::Checking
            } else if session.identity().is_none() {
                GuardDecision::Redirect(RedirectTarget::Login)
            } else {
                GuardDecision::Render
            }
        }
        // No placeholder state here: anything short of a resolved admin is sent away.
        GuardVariant::AdminOnly => match session.identity() {
            Some(identity) if identity.is_admin => GuardDecision::Render,
            _ => GuardDecision::Redirect(RedirectTarget::Dashboard),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Identity;

    fn resolved(identity: Option<Identity>) -> SessionState {
        let mut session = SessionState::restoring();
        session.resolve(identity);
        session
    }

    #[test]
    fn test_authenticated_checking_while_loading() {
        let session = SessionState::restoring();
        assert_eq!(evaluate(GuardVariant::Authenticated, &session), GuardDecision::Checking);
    }

    #[test]
    fn test_authenticated_redirects_to_login() {
        let decision = evaluate(GuardVariant::Authenticated, &resolved(None));
        assert_eq!(decision, GuardDecision::Redirect(RedirectTarget::Login));
        assert_eq!(RedirectTarget::Login.path(), "/login");
    }

    #[test]
    fn test_authenticated_renders() {
        let session = resolved(Some(Identity::new("U1", false)));
        assert_eq!(evaluate(GuardVariant::Authenticated, &session), GuardDecision::Render);
    }

    #[test]
    fn test_admin_only_redirects_non_admin() {
        let session = resolved(Some(Identity::new("U1", false)));
        assert_eq!(
            evaluate(GuardVariant::AdminOnly, &session),
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        );
        assert_eq!(RedirectTarget::Dashboard.path(), "/dashboard");
    }

    #[test]
    fn test_admin_only_has_no_placeholder() {
        let session = SessionState::restoring();
        assert_eq!(
            evaluate(GuardVariant::AdminOnly, &session),
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        );
        assert_eq!(
            evaluate(GuardVariant::AdminOnly, &resolved(None)),
            GuardDecision::Redirect(RedirectTarget::Dashboard)
        );
    }

    #[test]
    fn test_admin_only_renders_admin() {
        let session = resolved(Some(Identity::new("A1", true)));
        assert_eq!(evaluate(GuardVariant::AdminOnly, &session), GuardDecision::Render);
    }

    #[test]
    fn test_reevaluated_after_sign_out() {
        let mut session = resolved(Some(Identity::new("U1", true)));
        assert_eq!(evaluate(GuardVariant::Authenticated, &session), GuardDecision::Render);
        session.sign_out();
        assert_eq!(
            evaluate(GuardVariant::Authenticated, &session),
            GuardDecision::Redirect(RedirectTarget::Login)
        );
    }
}
