//! Patient Endpoints

use dashboard_core::{AppConfig, FetchError, Patient, PatientSummary};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::get_json;

pub async fn list_patients(config: &AppConfig) -> Result<Vec<PatientSummary>, FetchError> {
    get_json(config, "/api/patients").await
}

pub async fn fetch_patient(config: &AppConfig, id: &str) -> Result<Patient, FetchError> {
    get_json(config, &patient_path(id)).await
}

fn patient_path(id: &str) -> String {
    format!("/api/patients/{}", utf8_percent_encode(id, NON_ALPHANUMERIC))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_path_escapes_id() {
        assert_eq!(patient_path("P1"), "/api/patients/P1");
        assert_eq!(patient_path("a/b c"), "/api/patients/a%2Fb%20c");
    }
}
