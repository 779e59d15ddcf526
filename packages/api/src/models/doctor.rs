//! # Doctor records
//!
//! [`Doctor`] is the read-only roster entry the backend returns from
//! `GET /doctor` and the filter endpoint. Every field is defaulted so that a
//! partially populated record still renders as a card.
//!
//! [`NewDoctor`] is the add-doctor form payload (`POST /doctor/{token}`),
//! including the multi-selected availability slots.

use serde::{Deserialize, Serialize};

use super::require;
use crate::ApiError;

/// A doctor as listed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub email: String,
    /// Ordered time-slot strings, e.g. `"09:00-10:00"`.
    #[serde(default)]
    pub available_times: Vec<String>,
}

impl Doctor {
    /// Name to show on the card.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unknown Doctor"
        } else {
            &self.name
        }
    }
}

/// Add-doctor form payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub available_times: Vec<String>,
}

impl NewDoctor {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[
            ("Name", self.name.as_str()),
            ("Specialty", self.specialty.as_str()),
            ("Email", self.email.as_str()),
            ("Password", self.password.as_str()),
            ("Phone", self.phone.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_record() {
        let doctor: Doctor = serde_json::from_str(
            r#"{"id":7,"name":"Dr. Smith","specialty":"Cardiology","email":"s@c.org","phone":"123","availableTimes":["09:00-10:00","10:00-11:00"]}"#,
        )
        .unwrap();
        assert_eq!(doctor.id, 7);
        assert_eq!(doctor.specialty, "Cardiology");
        assert_eq!(doctor.available_times, vec!["09:00-10:00", "10:00-11:00"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let doctor: Doctor = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert!(doctor.available_times.is_empty());
        assert_eq!(doctor.display_name(), "Unknown Doctor");
    }

    #[test]
    fn test_new_doctor_requires_fields() {
        let mut doctor = NewDoctor {
            name: "Dr. Who".into(),
            specialty: "General".into(),
            email: "who@tardis.org".into(),
            password: "secret".into(),
            phone: "5551234".into(),
            available_times: vec![],
        };
        assert!(doctor.validate().is_ok());

        doctor.email = "  ".into();
        assert_eq!(
            doctor.validate(),
            Err(ApiError::Validation("Email is required".into()))
        );
    }

    #[test]
    fn test_new_doctor_serializes_camel_case() {
        let doctor = NewDoctor {
            available_times: vec!["09:00-10:00".into()],
            ..Default::default()
        };
        let json = serde_json::to_value(&doctor).unwrap();
        assert_eq!(json["availableTimes"][0], "09:00-10:00");
    }
}
