//! Doctor profile returned by `/api/auth/me`.

use serde::{Deserialize, Serialize};

use crate::session::Identity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl DoctorProfile {
    /// Reduce the profile to the session's identity record
    pub fn identity(&self) -> Identity {
        Identity::new(self.id.clone(), self.is_admin)
    }

    pub fn display_name(&self) -> String {
        format!("Dr. {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_profile() {
        let json = r#"{"id":"D1","name":"Okafor","email":"okafor@clinic.example","isAdmin":true}"#;
        let profile: DoctorProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.identity(), Identity::new("D1", true));
        assert_eq!(profile.display_name(), "Dr. Okafor");
        assert!(profile.specialty.is_none());
    }
}
