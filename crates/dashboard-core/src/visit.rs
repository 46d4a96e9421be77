//! Patient and Visit Models
//!
//! Data structures matching the backend's patient payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One clinical encounter. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    #[serde(default)]
    pub id: String,
    pub visit_date: DateTime<Utc>,
    pub calorie_intake: f64,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub blood_pressure: Option<String>,
    /// Markdown
    #[serde(default)]
    pub notes: Option<String>,
}

impl VisitRecord {
    pub fn date_label(&self) -> String {
        self.visit_date.format("%Y-%m-%d").to_string()
    }
}

/// Chronologically ordered visits; replaced wholesale, never edited in place
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitHistory(Vec<VisitRecord>);

impl VisitHistory {
    pub fn as_slice(&self) -> &[VisitRecord] {
        &self.0
    }

    /// Calorie change from the visit before `index` to `index`
    pub fn calorie_trend(&self, index: usize) -> Option<f64> {
        let current = self.0.get(index)?;
        let previous = self.0.get(index.checked_sub(1)?)?;
        Some(current.calorie_intake - previous.calorie_intake)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub last_visit_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub visits: VisitHistory,
    /// Most-recent-visit feed used by the diet editor. Independent of the
    /// visit the navigator is currently showing.
    #[serde(default)]
    pub latest_visit: Vec<VisitRecord>,
}

/// Inputs handed to the diet-plan sub-editor
#[derive(Debug, Clone, PartialEq)]
pub struct DietEditorInput {
    pub patient_id: String,
    pub visit_id: String,
    pub calorie_intake: Option<f64>,
}

impl DietEditorInput {
    pub fn from_patient(patient: &Patient, visit_id: Option<&str>) -> Self {
        Self {
            patient_id: patient.id.clone(),
            visit_id: visit_id.unwrap_or_default().to_string(),
            calorie_intake: patient.latest_visit.first().map(|v| v.calorie_intake),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATIENT_JSON: &str = r#"{
        "id": "P1",
        "name": "Ana Lima",
        "visits": [
            {"id": "v1", "visitDate": "2024-01-01T09:00:00Z", "calorieIntake": 2400},
            {"id": "v2", "visitDate": "2024-02-01T09:00:00Z", "calorieIntake": 2150, "weightKg": 81.5},
            {"id": "v3", "visitDate": "2024-03-01T09:00:00Z", "calorieIntake": 1900, "notes": "Reduce **sugar**"}
        ],
        "latestVisit": [
            {"id": "v9", "visitDate": "2024-03-15T09:00:00Z", "calorieIntake": 1750}
        ]
    }"#;

    #[test]
    fn test_decode_patient() {
        let patient: Patient = serde_json::from_str(PATIENT_JSON).unwrap();
        let visits = patient.visits.as_slice();
        assert_eq!(visits.len(), 3);
        assert_eq!(visits[1].weight_kg, Some(81.5));
        assert_eq!(visits[0].date_label(), "2024-01-01");
        assert_eq!(patient.latest_visit.len(), 1);
    }

    #[test]
    fn test_diet_input_uses_latest_visit_not_history() {
        let patient: Patient = serde_json::from_str(PATIENT_JSON).unwrap();
        let input = DietEditorInput::from_patient(&patient, None);
        assert_eq!(input.calorie_intake, Some(1750.0));
        assert_eq!(input.visit_id, "");
        assert_eq!(input.patient_id, "P1");

        let input = DietEditorInput::from_patient(&patient, Some("v3"));
        assert_eq!(input.visit_id, "v3");
    }

    #[test]
    fn test_diet_input_without_latest_visit() {
        let mut patient: Patient = serde_json::from_str(PATIENT_JSON).unwrap();
        patient.latest_visit.clear();
        assert_eq!(DietEditorInput::from_patient(&patient, None).calorie_intake, None);
    }

    #[test]
    fn test_calorie_trend() {
        let patient: Patient = serde_json::from_str(PATIENT_JSON).unwrap();
        assert_eq!(patient.visits.calorie_trend(0), None);
        assert_eq!(patient.visits.calorie_trend(2), Some(-250.0));
        assert_eq!(patient.visits.calorie_trend(7), None);
    }

    #[test]
    fn test_calorie_trend_of_repeated_records_follows_position() {
        let json = r#"[
            {"id": "", "visitDate": "2024-01-01T09:00:00Z", "calorieIntake": 2000},
            {"id": "", "visitDate": "2024-02-01T09:00:00Z", "calorieIntake": 1800},
            {"id": "", "visitDate": "2024-02-01T09:00:00Z", "calorieIntake": 1800}
        ]"#;
        let history: VisitHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.as_slice()[1], history.as_slice()[2]);
        assert_eq!(history.calorie_trend(1), Some(-200.0));
        assert_eq!(history.calorie_trend(2), Some(0.0));
    }

    #[test]
    fn test_missing_visits_default_empty() {
        let patient: Patient = serde_json::from_str(r#"{"id":"P2","name":"New"}"#).unwrap();
        assert!(patient.visits.as_slice().is_empty());
        assert!(patient.latest_visit.is_empty());
    }
}
