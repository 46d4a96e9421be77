//! UI Components
//!
//! Reusable Leptos components.

mod dashboard_tabs;
mod diet_editor_panel;
mod doctor_badge;
mod route_guard;
mod visit_details;
mod visit_navigator;
mod visit_selector;

pub use dashboard_tabs::DashboardTabs;
pub use diet_editor_panel::DietEditorPanel;
pub use doctor_badge::DoctorBadge;
pub use route_guard::{AdminRoute, ProtectedRoute};
pub use visit_details::{VisitMetrics, VisitNotes};
pub use visit_navigator::VisitNavigator;
pub use visit_selector::VisitSelector;
