//! # Appointments
//!
//! The backend has returned appointments in two shapes over time: flat
//! projections (`patientName`, `patientPhone`, ...) and full entities with
//! nested `patient` / `doctor` objects. [`Appointment`] accepts both, and
//! [`Appointment::patient_summary`] collapses them into the row the UI renders,
//! defaulting every missing field.
//!
//! [`BookingRequest`] is the body of `POST /appointments/{token}`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ApiError;

/// Nested patient object inside an appointment entity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PatientRef {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Nested doctor object inside an appointment entity.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DoctorRef {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// An appointment as returned by either appointment endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Option<i64>,
    pub appointment_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub doctor_name: Option<String>,
    pub patient_id: Option<i64>,
    pub patient_name: Option<String>,
    pub patient_phone: Option<String>,
    pub patient_email: Option<String>,
    /// `"2025-01-01T09:00:00"` or Jackson's `[2025,1,1,9,0]` array form.
    pub appointment_time: Option<Value>,
    pub status: Option<i32>,
    pub patient: Option<PatientRef>,
    pub doctor: Option<DoctorRef>,
}

/// The patient columns of an appointment row, every field filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

impl Appointment {
    pub fn id(&self) -> Option<i64> {
        self.id.or(self.appointment_id)
    }

    pub fn doctor_id(&self) -> Option<i64> {
        self.doctor_id
            .or_else(|| self.doctor.as_ref().and_then(|d| d.id))
    }

    pub fn doctor_name(&self) -> Option<String> {
        non_empty(self.doctor_name.as_ref())
            .or_else(|| non_empty(self.doctor.as_ref().and_then(|d| d.name.as_ref())))
    }

    /// Flat fields win over nested ones; `id → "N/A"`, `name → "Unknown"`,
    /// `phone`/`email → "-"` when neither is present.
    pub fn patient_summary(&self) -> PatientSummary {
        let nested = self.patient.as_ref();
        PatientSummary {
            id: self
                .patient_id
                .or_else(|| nested.and_then(|p| p.id))
                .map(|id| id.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            name: non_empty(self.patient_name.as_ref())
                .or_else(|| non_empty(nested.and_then(|p| p.name.as_ref())))
                .unwrap_or_else(|| "Unknown".to_string()),
            phone: non_empty(self.patient_phone.as_ref())
                .or_else(|| non_empty(nested.and_then(|p| p.phone.as_ref())))
                .unwrap_or_else(|| "-".to_string()),
            email: non_empty(self.patient_email.as_ref())
                .or_else(|| non_empty(nested.and_then(|p| p.email.as_ref())))
                .unwrap_or_else(|| "-".to_string()),
        }
    }

    /// Human-readable appointment time, `"-"` when absent.
    pub fn time_label(&self) -> String {
        match &self.appointment_time {
            Some(Value::String(s)) => s.replacen('T', " ", 1),
            Some(Value::Array(parts)) => {
                let n: Vec<i64> = parts.iter().filter_map(Value::as_i64).collect();
                match n.as_slice() {
                    [y, mo, d, h, mi, ..] => format!("{y:04}-{mo:02}-{d:02} {h:02}:{mi:02}"),
                    [y, mo, d] => format!("{y:04}-{mo:02}-{d:02}"),
                    _ => "-".to_string(),
                }
            }
            _ => "-".to_string(),
        }
    }
}

/// `{ "id": .. }` reference used in request bodies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdRef {
    pub id: i64,
}

/// Body of a booking request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub doctor: IdRef,
    pub patient: IdRef,
    pub appointment_time: String,
    pub status: i32,
}

impl BookingRequest {
    /// Book the start of `slot` (`"HH:MM-HH:MM"` or `"HH:MM"`) on `date`.
    pub fn new(doctor_id: i64, patient_id: i64, date: NaiveDate, slot: &str) -> Result<Self, ApiError> {
        let start = slot.split('-').next().unwrap_or_default().trim();
        if start.is_empty() {
            return Err(ApiError::validation("Please select a time slot"));
        }
        let time = NaiveTime::parse_from_str(start, "%H:%M")
            .map_err(|_| ApiError::validation(format!("Invalid time slot: {slot}")))?;
        Ok(Self {
            doctor: IdRef { id: doctor_id },
            patient: IdRef { id: patient_id },
            appointment_time: date.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string(),
            status: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_projection() {
        let appt: Appointment = serde_json::from_str(
            r#"{"id":3,"doctorId":9,"patientId":4,"patientName":"Ann","patientPhone":"555","patientEmail":"ann@x.org"}"#,
        )
        .unwrap();
        assert_eq!(appt.id(), Some(3));
        assert_eq!(appt.doctor_id(), Some(9));
        assert_eq!(
            appt.patient_summary(),
            PatientSummary {
                id: "4".into(),
                name: "Ann".into(),
                phone: "555".into(),
                email: "ann@x.org".into(),
            }
        );
    }

    #[test]
    fn test_nested_entity() {
        let appt: Appointment = serde_json::from_str(
            r#"{"appointmentId":5,"doctor":{"id":2,"name":"Dr. B","availableTimes":[]},"patient":{"id":8,"name":"Bo","phone":"1","email":"bo@x.org","address":"here"},"appointmentTime":[2025,3,4,10,30]}"#,
        )
        .unwrap();
        assert_eq!(appt.id(), Some(5));
        assert_eq!(appt.doctor_id(), Some(2));
        assert_eq!(appt.doctor_name().as_deref(), Some("Dr. B"));
        assert_eq!(appt.patient_summary().name, "Bo");
        assert_eq!(appt.time_label(), "2025-03-04 10:30");
    }

    #[test]
    fn test_missing_patient_fields_default() {
        let appt: Appointment = serde_json::from_str(r#"{"id":1,"patientName":""}"#).unwrap();
        assert_eq!(
            appt.patient_summary(),
            PatientSummary {
                id: "N/A".into(),
                name: "Unknown".into(),
                phone: "-".into(),
                email: "-".into(),
            }
        );
        assert_eq!(appt.time_label(), "-");
    }

    #[test]
    fn test_string_time_label() {
        let appt: Appointment =
            serde_json::from_str(r#"{"appointmentTime":"2025-03-04T09:00:00"}"#).unwrap();
        assert_eq!(appt.time_label(), "2025-03-04 09:00:00");
    }

    #[test]
    fn test_booking_request_from_slot() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let booking = BookingRequest::new(2, 8, date, "09:00-10:00").unwrap();
        assert_eq!(booking.appointment_time, "2025-06-02T09:00:00");

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["doctor"]["id"], 2);
        assert_eq!(json["patient"]["id"], 8);
        assert_eq!(json["appointmentTime"], "2025-06-02T09:00:00");
        assert_eq!(json["status"], 0);
    }

    #[test]
    fn test_booking_request_rejects_bad_slot() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert!(matches!(
            BookingRequest::new(1, 1, date, ""),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            BookingRequest::new(1, 1, date, "morning"),
            Err(ApiError::Validation(_))
        ));
    }
}
