//! Clinic Dashboard Core
//!
//! Platform-neutral state machines behind the dashboard UI:
//! - session: current identity and its loading flag
//! - guard: render-or-redirect decisions for protected routes
//! - fetcher: identity-scoped fetch lifecycle with stale-response discard
//! - navigator: position over an ordered visit sequence
//! - tabs: the active dashboard view
//!
//! Nothing here touches the DOM, so every transition is testable natively.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod guard;
pub mod navigator;
pub mod profile;
pub mod session;
pub mod tabs;
pub mod visit;

pub use config::AppConfig;
pub use error::{ConfigError, FetchError};
pub use fetcher::{Completion, FetchTicket, IdentityFetcher, LoadState};
pub use guard::{evaluate, GuardDecision, GuardVariant, RedirectTarget};
pub use navigator::{SequenceNavigator, Transition};
pub use profile::DoctorProfile;
pub use session::{Identity, SessionState};
pub use tabs::{DashboardTab, TabSelection};
pub use visit::{DietEditorInput, Patient, PatientSummary, VisitHistory, VisitRecord};
