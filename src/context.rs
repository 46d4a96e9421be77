//! Session Context
//!
//! The session state provider, handed to guards and fetchers via the Leptos
//! Context API. Created once per application load; torn down on sign-out.

use dashboard_core::{AppConfig, FetchError, Identity, SessionState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::storage::TokenStorage;

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current identity and loading flag - read
    pub state: ReadSignal<SessionState>,
    /// Current identity and loading flag - write
    set_state: WriteSignal<SessionState>,
    /// Bumped per restore; only the newest identity lookup may resolve
    restore_generation: StoredValue<u64>,
    config: StoredValue<AppConfig>,
}

impl SessionContext {
    pub fn new(config: AppConfig) -> Self {
        let (state, set_state) = signal(SessionState::restoring());
        Self {
            state,
            set_state,
            restore_generation: StoredValue::new(0),
            config: StoredValue::new(config),
        }
    }

    /// Current identity (tracked)
    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity().cloned())
    }

    fn token_storage(&self) -> TokenStorage {
        self.config.with_value(|c| TokenStorage::new(&c.token_storage_key))
    }

    /// Resolve the identity behind the persisted token, if any.
    pub fn restore(&self) {
        self.restore_generation.update_value(|g| *g += 1);
        let generation = self.restore_generation.get_value();

        let storage = self.token_storage();
        if storage.get().is_none() {
            tracing::debug!("no stored token, starting signed out");
            self.set_state.update(|s| s.resolve(None));
            return;
        }

        self.set_state.update(|s| s.begin_restore());
        let config = self.config.get_value();
        let ctx = *self;
        spawn_local(async move {
            let result = api::fetch_current_doctor(&config).await;
            if ctx.restore_generation.get_value() != generation {
                tracing::debug!("superseded identity lookup ignored");
                return;
            }
            match result {
                Ok(profile) => ctx.set_state.update(|s| s.resolve(Some(profile.identity()))),
                Err(e) => {
                    tracing::warn!(error = %e, "could not restore session");
                    if e.invalidates_session() {
                        storage.clear();
                    }
                    ctx.set_state.update(|s| s.resolve(None));
                }
            }
        });
    }

    /// Persist a new bearer token and resolve its identity
    pub fn sign_in(&self, token: &str) -> Result<(), String> {
        if token.trim().is_empty() {
            return Err(FetchError::MissingToken.to_string());
        }
        self.token_storage().set(token)?;
        self.restore();
        Ok(())
    }

    /// Tear the session down: forget the token and the identity
    pub fn sign_out(&self) {
        self.restore_generation.update_value(|g| *g += 1);
        self.token_storage().clear();
        self.set_state.update(|s| s.sign_out());
    }
}

/// Create the session for this application load and provide it to children
pub fn provide_session(config: AppConfig) -> SessionContext {
    let ctx = SessionContext::new(config);
    provide_context(ctx);
    ctx.restore();
    ctx
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
