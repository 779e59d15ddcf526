//! # Backend URL construction
//!
//! Every path the client calls is built here, from a configured base URL and
//! percent-encoded path segments. Call sites never format URLs themselves.
//!
//! ## "Unset" sentinels
//!
//! Two endpoints take optional criteria as path segments and they disagree on
//! how "unset" is spelled:
//!
//! | Endpoint | Constant | Value |
//! |----------|----------|-------|
//! | `GET /doctor/filter/{name}/{time}/{specialty}` | [`DOCTOR_FILTER_UNSET`] | empty segment |
//! | `GET /appointments/{date}/{patientName}/{token}` | [`APPOINTMENT_NAME_UNSET`] | literal `null` |
//! | `GET /patient/filter/{condition}/{name}/{token}` | [`PATIENT_FILTER_UNSET`] | literal `null` |
//!
//! They are separate constants and must not be unified.

use chrono::NaiveDate;
use reqwest::Url;

use crate::ApiError;

/// An unset doctor-filter criterion: an empty path segment.
pub const DOCTOR_FILTER_UNSET: &str = "";

/// An unset patient-name filter on the appointment endpoint.
pub const APPOINTMENT_NAME_UNSET: &str = "null";

/// An unset criterion on the patient's own appointment filter.
pub const PATIENT_FILTER_UNSET: &str = "null";

/// Trim UI input; empty or whitespace-only input is unset.
pub fn normalize(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Doctor search criteria. Constructed only through normalization, so a
/// criterion is either `None` or a non-blank string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    name: Option<String>,
    time: Option<String>,
    specialty: Option<String>,
}

impl DoctorFilter {
    pub fn new(name: &str, time: &str, specialty: &str) -> Self {
        Self {
            name: normalize(name),
            time: normalize(time),
            specialty: normalize(specialty),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    /// No criterion set.
    pub fn is_unset(&self) -> bool {
        self.name.is_none() && self.time.is_none() && self.specialty.is_none()
    }

    fn segments(&self) -> [&str; 3] {
        [
            self.name().unwrap_or(DOCTOR_FILTER_UNSET),
            self.time().unwrap_or(DOCTOR_FILTER_UNSET),
            self.specialty().unwrap_or(DOCTOR_FILTER_UNSET),
        ]
    }
}

/// Past or upcoming appointments, as the patient filter spells them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentCondition {
    /// Completed appointments.
    Past,
    /// Scheduled appointments.
    Future,
}

impl AppointmentCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentCondition::Past => "past",
            AppointmentCondition::Future => "future",
        }
    }

    /// `"past"` or `"future"`, case-insensitive; anything else is unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "past" => Some(AppointmentCondition::Past),
            "future" => Some(AppointmentCondition::Future),
            _ => None,
        }
    }
}

/// Criteria for a patient's own appointments: past/future and doctor name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientAppointmentFilter {
    condition: Option<AppointmentCondition>,
    doctor_name: Option<String>,
}

impl PatientAppointmentFilter {
    pub fn new(condition: &str, doctor_name: &str) -> Self {
        Self {
            condition: AppointmentCondition::parse(condition),
            doctor_name: normalize(doctor_name),
        }
    }

    pub fn condition(&self) -> Option<AppointmentCondition> {
        self.condition
    }

    pub fn doctor_name(&self) -> Option<&str> {
        self.doctor_name.as_deref()
    }

    pub fn set_condition(&mut self, value: &str) {
        self.condition = AppointmentCondition::parse(value);
    }

    pub fn set_doctor_name(&mut self, input: &str) {
        self.doctor_name = normalize(input);
    }

    pub fn is_unset(&self) -> bool {
        self.condition.is_none() && self.doctor_name.is_none()
    }
}

/// Which auth endpoint a login goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginKind {
    Admin,
    Doctor,
    Patient,
}

impl LoginKind {
    fn resource(&self) -> &'static str {
        match self {
            LoginKind::Admin => "admin",
            LoginKind::Doctor => "doctor",
            LoginKind::Patient => "patient",
        }
    }

    /// The session role a successful login grants.
    pub fn role(&self) -> store::Role {
        match self {
            LoginKind::Admin => store::Role::Admin,
            LoginKind::Doctor => store::Role::Doctor,
            LoginKind::Patient => store::Role::LoggedPatient,
        }
    }
}

/// URL builder rooted at the configured backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::Transport(format!("invalid base URL {base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Transport(format!("invalid base URL {base_url}")));
        }
        Ok(Self { base })
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn doctors(&self) -> Url {
        self.url(&["doctor"])
    }

    pub fn doctor_filter(&self, filter: &DoctorFilter) -> Url {
        let [name, time, specialty] = filter.segments();
        self.url(&["doctor", "filter", name, time, specialty])
    }

    pub fn save_doctor(&self, token: &str) -> Url {
        self.url(&["doctor", token])
    }

    pub fn delete_doctor(&self, id: i64, token: &str) -> Url {
        self.url(&["doctor", &id.to_string(), token])
    }

    pub fn login(&self, kind: LoginKind) -> Url {
        self.url(&[kind.resource(), "login"])
    }

    pub fn patient_signup(&self) -> Url {
        self.url(&["patient"])
    }

    pub fn patient_profile(&self, token: &str) -> Url {
        self.url(&["patient", token])
    }

    pub fn patient_appointments(&self, patient_id: i64, token: &str) -> Url {
        self.url(&["patient", &patient_id.to_string(), "patient", token])
    }

    pub fn doctor_appointments(&self, date: NaiveDate, patient_name: Option<&str>, token: &str) -> Url {
        let date = date.format("%Y-%m-%d").to_string();
        let name = patient_name.unwrap_or(APPOINTMENT_NAME_UNSET);
        self.url(&["appointments", &date, name, token])
    }

    pub fn book_appointment(&self, token: &str) -> Url {
        self.url(&["appointments", token])
    }

    pub fn patient_appointment_filter(&self, filter: &PatientAppointmentFilter, token: &str) -> Url {
        let condition = filter
            .condition()
            .map(|c| c.as_str())
            .unwrap_or(PATIENT_FILTER_UNSET);
        let name = filter.doctor_name().unwrap_or(PATIENT_FILTER_UNSET);
        self.url(&["patient", "filter", condition, name, token])
    }

    pub fn save_prescription(&self, token: &str) -> Url {
        self.url(&["prescription", token])
    }

    pub fn prescriptions(&self, appointment_id: i64, token: &str) -> Url {
        self.url(&["prescription", &appointment_id.to_string(), token])
    }
}
