//! Auth Endpoints

use dashboard_core::{AppConfig, DoctorProfile, FetchError};

use super::get_json;

/// Profile of the doctor the stored token belongs to
pub async fn fetch_current_doctor(config: &AppConfig) -> Result<DoctorProfile, FetchError> {
    get_json(config, "/api/auth/me").await
}
