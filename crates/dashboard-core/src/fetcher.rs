//! Identity-Scoped Fetcher
//!
//! Lifecycle of one GET-and-cache cycle tied to the current identity. The
//! fetcher never performs I/O itself: a transition that needs a request
//! returns a [`FetchTicket`], the caller issues the request, and hands the
//! ticket back with the result through [`IdentityFetcher::complete`].
//!
//! Tickets carry the identity id and a generation number. A response is
//! applied only while its identity is still current and nothing newer has
//! been applied, so a late answer for a previous identity (or an older
//! refetch) can never overwrite fresher state.

use crate::error::FetchError;
use crate::session::Identity;

/// Tri-state of one asynchronous resource
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Ready(T),
    Errored(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Pending
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Errored(e.to_string()),
        }
    }
}

impl<T: Clone> LoadState<&T> {
    pub fn cloned(self) -> LoadState<T> {
        match self {
            LoadState::Pending => LoadState::Pending,
            LoadState::Ready(value) => LoadState::Ready(value.clone()),
            LoadState::Errored(msg) => LoadState::Errored(msg),
        }
    }
}

/// Permission to issue one request on behalf of an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    identity_id: String,
    generation: u64,
}

impl FetchTicket {
    pub fn identity_id(&self) -> &str {
        &self.identity_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// Stale response, state left untouched
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentityFetcher<T> {
    identity_id: Option<String>,
    resource: Option<T>,
    is_loading: bool,
    error: Option<String>,
    /// Generation of the most recently issued ticket
    issued: u64,
    /// Responses at or below this generation are stale
    applied: u64,
}

impl<T> Default for IdentityFetcher<T> {
    fn default() -> Self {
        Self {
            identity_id: None,
            resource: None,
            is_loading: false,
            error: None,
            issued: 0,
            applied: 0,
        }
    }
}

impl<T> IdentityFetcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource(&self) -> Option<&T> {
        self.resource.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Collapse the fields into a single tri-state for rendering. A loaded
    /// resource stays `Ready` while a refetch is in flight.
    pub fn load_state(&self) -> LoadState<&T> {
        match (&self.error, &self.resource) {
            (Some(msg), _) => LoadState::Errored(msg.clone()),
            (None, Some(resource)) => LoadState::Ready(resource),
            (None, None) => LoadState::Pending,
        }
    }

    /// Follow the session's identity.
    ///
    /// Returns a ticket when a request must be issued: the identity became
    /// present or its id changed. Losing the identity clears the resource.
    pub fn on_identity(&mut self, identity: Option<&Identity>) -> Option<FetchTicket> {
        match identity {
            None => {
                if self.identity_id.take().is_some() {
                    tracing::debug!("identity cleared, dropping cached resource");
                }
                self.resource = None;
                self.error = None;
                self.is_loading = false;
                self.applied = self.issued;
                None
            }
            Some(identity) if self.identity_id.as_deref() == Some(identity.id.as_str()) => None,
            Some(identity) => {
                tracing::debug!(identity = %identity.id, "identity changed, fetching");
                self.identity_id = Some(identity.id.clone());
                // A different person's profile must not linger while the new one loads.
                self.resource = None;
                self.applied = self.issued;
                Some(self.issue(identity.id.clone()))
            }
        }
    }

    /// Start a new cycle for the current identity. No identity, no request.
    pub fn refetch(&mut self) -> Option<FetchTicket> {
        let id = self.identity_id.clone()?;
        Some(self.issue(id))
    }

    pub fn complete(&mut self, ticket: FetchTicket, result: Result<T, FetchError>) -> Completion {
        let current = self.identity_id.as_deref() == Some(ticket.identity_id.as_str());
        if !current || ticket.generation <= self.applied {
            tracing::debug!(
                identity = %ticket.identity_id,
                generation = ticket.generation,
                "discarding stale response"
            );
            return Completion::Discarded;
        }

        self.applied = ticket.generation;
        match result {
            Ok(resource) => {
                self.resource = Some(resource);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(identity = %ticket.identity_id, error = %e, "fetch failed");
                self.error = Some(e.to_string());
            }
        }
        // Older in-flight requests may still land, but only the newest ends loading.
        if ticket.generation == self.issued {
            self.is_loading = false;
        }
        Completion::Applied
    }

    fn issue(&mut self, identity_id: String) -> FetchTicket {
        self.issued += 1;
        self.is_loading = true;
        self.error = None;
        FetchTicket {
            identity_id,
            generation: self.issued,
        }
    }
}
