//! Identity-Scoped Resources
//!
//! Leptos glue around `IdentityFetcher`: follows the session's identity,
//! issues requests with `spawn_local`, and lets stale responses fall away.

use dashboard_core::{AppConfig, Completion, DoctorProfile, FetchTicket, IdentityFetcher, LoadState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::use_config;
use crate::context::SessionContext;

/// The signed-in doctor's profile: `{ doctor, is_loading, error, refetch }`
#[derive(Clone, Copy)]
pub struct DoctorResource {
    state: RwSignal<IdentityFetcher<DoctorProfile>>,
    config: StoredValue<AppConfig>,
}

impl DoctorResource {
    pub fn doctor(&self) -> Option<DoctorProfile> {
        self.state.with(|f| f.resource().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|f| f.is_loading())
    }

    /// Profile, pending, or the last error; a loaded profile stays `Ready`
    /// while a refetch runs
    pub fn load_state(&self) -> LoadState<DoctorProfile> {
        self.state.with(|f| f.load_state().cloned())
    }

    /// Start a new fetch cycle for the current identity
    pub fn refetch(&self) {
        if let Some(ticket) = self.state.try_update(|f| f.refetch()).flatten() {
            self.issue(ticket);
        }
    }

    fn issue(&self, ticket: FetchTicket) {
        let state = self.state;
        let config = self.config.get_value();
        spawn_local(async move {
            let result = api::fetch_current_doctor(&config).await;
            let identity = ticket.identity_id().to_string();
            match state.try_update(|f| f.complete(ticket, result)) {
                Some(Completion::Applied) => tracing::debug!(%identity, "doctor profile applied"),
                Some(Completion::Discarded) => tracing::debug!(%identity, "doctor profile discarded"),
                None => {}
            }
        });
    }
}

/// Fetch the doctor profile for whoever is signed in, re-fetching whenever
/// the identity changes and clearing it on sign-out.
pub fn use_doctor_profile(session: SessionContext) -> DoctorResource {
    let resource = DoctorResource {
        state: RwSignal::new(IdentityFetcher::new()),
        config: StoredValue::new(use_config()),
    };

    Effect::new(move |_| {
        let identity = session.identity();
        let ticket = resource
            .state
            .try_update(|f| f.on_identity(identity.as_ref()))
            .flatten();
        if let Some(ticket) = ticket {
            resource.issue(ticket);
        }
    });

    resource
}
