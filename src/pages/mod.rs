//! Routed Pages

mod admin;
mod login;
mod patient_dashboard;
mod patient_list;

pub use admin::AdminPage;
pub use login::LoginPage;
pub use patient_dashboard::PatientDashboard;
pub use patient_list::PatientListPage;
