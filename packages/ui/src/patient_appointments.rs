//! The logged-in patient's own appointments, optionally narrowed to past or
//! upcoming ones and by doctor name.
//!
//! With no criterion set the list comes from the patient's profile id; any
//! criterion switches to the filter endpoint, which resolves the patient from
//! the token.

use api::{Appointment, ClinicBackend, PatientAppointmentFilter};
use dioxus::prelude::*;
use store::{SessionStorage, SessionStore};

use crate::appointments::FETCH_FAILED_MESSAGE;
use crate::icons::FaMagnifyingGlass;
use crate::provider::use_backend;
use crate::session::session_store;
use crate::Icon;

pub const NO_APPOINTMENTS_MESSAGE: &str = "No appointments found.";
pub const NO_FILTER_MATCHES_MESSAGE: &str = "No appointments found with the given filters.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientAppointmentRow {
    pub appointment_id: Option<i64>,
    pub doctor: String,
    pub time: String,
    pub status: &'static str,
}

fn status_label(status: Option<i32>) -> &'static str {
    match status {
        Some(0) => "Scheduled",
        Some(1) => "Completed",
        _ => "-",
    }
}

impl From<&Appointment> for PatientAppointmentRow {
    fn from(appointment: &Appointment) -> Self {
        Self {
            appointment_id: appointment.id(),
            doctor: appointment.doctor_name().unwrap_or_else(|| "-".to_string()),
            time: appointment.time_label(),
            status: status_label(appointment.status),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatientAppointmentsState {
    Loading,
    Rows(Vec<PatientAppointmentRow>),
    Empty,
    NoMatches,
    Failed,
}

impl PatientAppointmentsState {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PatientAppointmentsState::Loading | PatientAppointmentsState::Rows(_) => None,
            PatientAppointmentsState::Empty => Some(NO_APPOINTMENTS_MESSAGE),
            PatientAppointmentsState::NoMatches => Some(NO_FILTER_MATCHES_MESSAGE),
            PatientAppointmentsState::Failed => Some(FETCH_FAILED_MESSAGE),
        }
    }
}

fn rows(appointments: &[Appointment]) -> Vec<PatientAppointmentRow> {
    appointments.iter().map(PatientAppointmentRow::from).collect()
}

/// Fetch the patient's appointments matching `filter`.
pub async fn load_patient_appointments<B, S>(
    backend: &B,
    store: &SessionStore<S>,
    filter: &PatientAppointmentFilter,
) -> PatientAppointmentsState
where
    B: ClinicBackend,
    S: SessionStorage,
{
    let Some(token) = store.get_token() else {
        tracing::warn!("no token for patient appointments");
        return PatientAppointmentsState::Failed;
    };

    if !filter.is_unset() {
        return match backend.filter_patient_appointments(filter, &token).await {
            Ok(appointments) if appointments.is_empty() => PatientAppointmentsState::NoMatches,
            Ok(appointments) => PatientAppointmentsState::Rows(rows(&appointments)),
            Err(e) => {
                tracing::error!("Error filtering patient appointments: {e}");
                PatientAppointmentsState::Failed
            }
        };
    }

    let patient = match backend.patient_profile(&token).await {
        Ok(Some(patient)) => patient,
        Ok(None) => {
            tracing::warn!("patient profile empty");
            return PatientAppointmentsState::Failed;
        }
        Err(e) => {
            tracing::error!("Failed to fetch patient profile: {e}");
            return PatientAppointmentsState::Failed;
        }
    };

    match backend.patient_appointments(patient.id, &token).await {
        Ok(appointments) if appointments.is_empty() => PatientAppointmentsState::Empty,
        Ok(appointments) => PatientAppointmentsState::Rows(rows(&appointments)),
        Err(e) => {
            tracing::error!("Error loading patient appointments: {e}");
            PatientAppointmentsState::Failed
        }
    }
}

#[component]
pub fn PatientAppointmentsView() -> Element {
    let backend = use_backend();
    let mut filter = use_signal(PatientAppointmentFilter::default);
    let mut condition = use_signal(String::new);
    let mut search = use_signal(String::new);

    // Re-runs whenever the filter changes.
    let state = use_resource(move || {
        let backend = backend.clone();
        let filter = filter();
        async move { load_patient_appointments(&backend, &session_store(), &filter).await }
    });

    let current = state().unwrap_or(PatientAppointmentsState::Loading);

    rsx! {
        h2 { class: "page-title", "Your Appointments" }
        div {
            class: "filter-bar",
            div {
                class: "search-field",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    id: "searchBar",
                    r#type: "text",
                    placeholder: "Search by doctor name",
                    value: search(),
                    oninput: move |evt: FormEvent| {
                        search.set(evt.value());
                        filter.write().set_doctor_name(&evt.value());
                    },
                }
            }
            select {
                id: "appointmentFilter",
                value: condition(),
                onchange: move |evt: FormEvent| {
                    condition.set(evt.value());
                    filter.write().set_condition(&evt.value());
                },
                option { value: "", "All Appointments" }
                option { value: "future", "Upcoming Appointments" }
                option { value: "past", "Past Appointments" }
            }
        }
        table {
            class: "patient-table",
            thead {
                tr {
                    th { "Doctor" }
                    th { "Date & Time" }
                    th { "Status" }
                }
            }
            tbody {
                match current {
                    PatientAppointmentsState::Loading => rsx! {},
                    PatientAppointmentsState::Rows(rows) => rsx! {
                        for (index, row) in rows.into_iter().enumerate() {
                            tr {
                                key: "{index}",
                                td { "{row.doctor}" }
                                td { "{row.time}" }
                                td { "{row.status}" }
                            }
                        }
                    },
                    other => rsx! {
                        tr {
                            td {
                                colspan: "3",
                                class: "text-center",
                                "{other.message().unwrap_or_default()}"
                            }
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{patient, FakeBackend};
    use store::{MemoryStorage, Role};

    fn logged_in() -> SessionStore<MemoryStorage> {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session(Role::LoggedPatient, "pat-tok");
        store
    }

    #[tokio::test]
    async fn test_profile_then_appointments() {
        let appointment: Appointment = serde_json::from_value(serde_json::json!({
            "id": 11,
            "doctor": { "id": 2, "name": "Dr. Smith" },
            "appointmentTime": "2025-03-01T10:00:00",
            "status": 0
        }))
        .unwrap();
        let backend = FakeBackend {
            profile: Ok(Some(patient(9))),
            appointments: Ok(vec![appointment]),
            ..Default::default()
        };

        let state = load_patient_appointments(&backend, &logged_in(), &PatientAppointmentFilter::default()).await;
        assert_eq!(
            state,
            PatientAppointmentsState::Rows(vec![PatientAppointmentRow {
                appointment_id: Some(11),
                doctor: "Dr. Smith".into(),
                time: "2025-03-01 10:00:00".into(),
                status: "Scheduled",
            }])
        );
        assert_eq!(
            backend.calls(),
            vec!["patient_profile pat-tok".to_string(), "patient_appointments 9 pat-tok".to_string()]
        );
    }

    #[tokio::test]
    async fn test_missing_profile_fails_without_listing() {
        let backend = FakeBackend::default();
        let state = load_patient_appointments(&backend, &logged_in(), &PatientAppointmentFilter::default()).await;
        assert_eq!(state, PatientAppointmentsState::Failed);
        assert_eq!(backend.calls(), vec!["patient_profile pat-tok".to_string()]);
    }

    #[tokio::test]
    async fn test_filter_goes_to_filter_endpoint() {
        let appointment: Appointment = serde_json::from_value(serde_json::json!({
            "id": 12,
            "doctorName": "Dr. Smith",
            "appointmentTime": "2024-11-02T09:00:00",
            "status": 1
        }))
        .unwrap();
        let backend = FakeBackend {
            appointments: Ok(vec![appointment]),
            ..Default::default()
        };
        let filter = PatientAppointmentFilter::new("past", "Smith");

        let state = load_patient_appointments(&backend, &logged_in(), &filter).await;
        let PatientAppointmentsState::Rows(rows) = state else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].status, "Completed");
        assert_eq!(
            backend.calls(),
            vec!["filter_patient_appointments past Smith pat-tok".to_string()]
        );
    }

    #[tokio::test]
    async fn test_filter_without_matches_has_its_own_message() {
        let backend = FakeBackend::default();
        let filter = PatientAppointmentFilter::new("future", "");

        let state = load_patient_appointments(&backend, &logged_in(), &filter).await;
        assert_eq!(state, PatientAppointmentsState::NoMatches);
        assert_eq!(state.message(), Some(NO_FILTER_MATCHES_MESSAGE));
        assert_eq!(
            backend.calls(),
            vec!["filter_patient_appointments future null pat-tok".to_string()]
        );
    }

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let backend = FakeBackend::default();
        let store = SessionStore::new(MemoryStorage::new());
        let filter = PatientAppointmentFilter::new("past", "");

        let state = load_patient_appointments(&backend, &store, &filter).await;
        assert_eq!(state, PatientAppointmentsState::Failed);
        assert!(backend.calls().is_empty());
    }
}
