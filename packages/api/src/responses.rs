//! Response bodies and their normalization.

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::models::{Appointment, Doctor, Patient, Prescription};

/// `{ "doctors": [...] }`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DoctorsBody {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

/// `{ "prescriptions": [...] }`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PrescriptionsBody {
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
}

/// `{ "message": "..." }`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TokenData {
    #[serde(default)]
    pub token: Option<String>,
}

/// Auth response. The token may sit at the top level or under `data`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TokenBody {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub data: Option<TokenData>,
    #[serde(default)]
    pub message: Option<String>,
}

impl TokenBody {
    pub fn token(&self) -> Option<&str> {
        let nested = self.data.as_ref().and_then(|d| d.token.as_deref());
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(nested.filter(|t| !t.is_empty()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppointmentsData {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// The three accepted appointment-list shapes, plus anything else read as empty.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum AppointmentsBody {
    List(Vec<Appointment>),
    Wrapped { appointments: Vec<Appointment> },
    Nested { data: AppointmentsData },
    Other(IgnoredAny),
}

impl AppointmentsBody {
    pub fn into_vec(self) -> Vec<Appointment> {
        match self {
            AppointmentsBody::List(list) => list,
            AppointmentsBody::Wrapped { appointments } => appointments,
            AppointmentsBody::Nested { data } => data.appointments,
            AppointmentsBody::Other(_) => Vec::new(),
        }
    }
}

/// `{ "patient": {...} }`, a bare patient record, or nothing usable.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PatientBody {
    Wrapped { patient: Patient },
    Bare(Patient),
    Other(IgnoredAny),
}

impl PatientBody {
    pub fn into_patient(self) -> Option<Patient> {
        match self {
            PatientBody::Wrapped { patient } | PatientBody::Bare(patient) => Some(patient),
            PatientBody::Other(_) => None,
        }
    }
}

/// Pull a user-facing message out of an error body: JSON `{message}` first,
/// then any non-empty plain-text body.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<MessageBody>(trimmed) {
        Ok(parsed) => parsed.message.filter(|m| !m.trim().is_empty()),
        Err(_) if trimmed.starts_with('{') || trimmed.starts_with('[') => None,
        Err(_) => Some(trimmed.to_string()),
    }
}
