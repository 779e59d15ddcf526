//! Prescriptions a doctor writes against one of their appointments.
//!
//! The backend keeps at most one prescription per appointment and marks the
//! appointment completed when it is saved.

use serde::{Deserialize, Serialize};

use super::require;
use crate::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub patient_name: String,
    pub appointment_id: i64,
    #[serde(default)]
    pub medication: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_notes: Option<String>,
}

impl Prescription {
    pub fn new(appointment_id: i64, patient_name: impl Into<String>) -> Self {
        Self {
            appointment_id,
            patient_name: patient_name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[
            ("Patient name", self.patient_name.as_str()),
            ("Medication", self.medication.as_str()),
            ("Dosage", self.dosage.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_without_empty_optionals() {
        let mut prescription = Prescription::new(12, "Ann Lee");
        prescription.medication = "Amoxicillin".into();
        prescription.dosage = "500mg".into();

        let json = serde_json::to_value(&prescription).unwrap();
        assert_eq!(json["appointmentId"], 12);
        assert_eq!(json["patientName"], "Ann Lee");
        assert!(json.get("id").is_none());
        assert!(json.get("doctorNotes").is_none());
    }

    #[test]
    fn test_requires_medication_and_dosage() {
        let mut prescription = Prescription::new(12, "Ann Lee");
        assert_eq!(
            prescription.validate(),
            Err(ApiError::Validation("Medication is required".into()))
        );
        prescription.medication = "Ibuprofen".into();
        prescription.dosage = " ".into();
        assert_eq!(
            prescription.validate(),
            Err(ApiError::Validation("Dosage is required".into()))
        );
    }

    #[test]
    fn test_deserializes_stored_record() {
        let prescription: Prescription = serde_json::from_str(
            r#"{"id":"65f0","patientName":"Ann","appointmentId":3,"medication":"Ibuprofen","dosage":"200mg","doctorNotes":"after meals"}"#,
        )
        .unwrap();
        assert_eq!(prescription.id.as_deref(), Some("65f0"));
        assert_eq!(prescription.doctor_notes.as_deref(), Some("after meals"));
    }
}
