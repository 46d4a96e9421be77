//! Session State
//!
//! The authenticated identity (or none) plus a loading flag. One instance is
//! created per application load and handed explicitly to the route guards and
//! the identity-scoped fetcher.

use serde::{Deserialize, Serialize};

/// Minimal record of the signed-in doctor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl Identity {
    pub fn new(id: impl Into<String>, is_admin: bool) -> Self {
        Self { id: id.into(), is_admin }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    identity: Option<Identity>,
    loading: bool,
}

impl SessionState {
    /// Session on app start when a persisted token still has to be checked
    pub fn restoring() -> Self {
        Self { identity: None, loading: true }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Mark the identity as being resolved again (e.g. after a new token)
    pub fn begin_restore(&mut self) {
        self.loading = true;
    }

    /// Finish identity resolution. `None` means no valid session.
    pub fn resolve(&mut self, identity: Option<Identity>) {
        match &identity {
            Some(id) => tracing::info!(identity = %id.id, admin = id.is_admin, "session resolved"),
            None => tracing::info!("session resolved without identity"),
        }
        self.identity = identity;
        self.loading = false;
    }

    /// Tear the session down on logout or token expiry
    pub fn sign_out(&mut self) {
        if let Some(id) = self.identity.take() {
            tracing::info!(identity = %id.id, "session torn down");
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_lifecycle() {
        let mut session = SessionState::restoring();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());

        session.resolve(Some(Identity::new("U1", false)));
        assert!(!session.is_loading());
        assert_eq!(session.identity().map(|i| i.id.as_str()), Some("U1"));

        session.sign_out();
        assert!(session.identity().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_identity_wire_format() {
        let identity: Identity = serde_json::from_str(r#"{"id":"U7","isAdmin":true}"#).unwrap();
        assert_eq!(identity, Identity::new("U7", true));

        let identity: Identity = serde_json::from_str(r#"{"id":"U8"}"#).unwrap();
        assert!(!identity.is_admin);
    }
}
