//! Doctor-facing appointment table.
//!
//! Every trigger (date change, "Today", each keystroke in the patient search)
//! re-fetches with the complete `{date, patient name, token}` triple. Nothing
//! is filtered client-side.
//!
//! Each row with an appointment id offers the prescription modal.

use api::{normalize, Appointment, ClinicBackend, PatientSummary};
use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use store::{SessionStorage, SessionStore};

use crate::icons::{FaCalendarDay, FaMagnifyingGlass, FaPrescription};
use crate::modal::{use_modals, Modal, ModalController, PrescriptionTarget};
use crate::provider::use_backend;
use crate::session::session_store;
use crate::Icon;

pub const NONE_FOR_DATE_MESSAGE: &str = "No Appointments found for the selected date.";
pub const FETCH_FAILED_MESSAGE: &str = "Error loading appointments. Try again later.";

/// Table filter state. The patient name is normalized on the way in, so it
/// is either unset or non-blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentQuery {
    date: NaiveDate,
    patient_name: Option<String>,
}

impl AppointmentQuery {
    pub fn today() -> Self {
        Self::on(Local::now().date_naive())
    }

    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            patient_name: None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn patient_name(&self) -> Option<&str> {
        self.patient_name.as_deref()
    }

    /// `YYYY-MM-DD`, the date picker's value.
    pub fn date_value(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Apply a date picker value. Unparseable input keeps the current date.
    pub fn set_date(&mut self, value: &str) {
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => self.date = date,
            Err(_) => tracing::debug!("ignoring date picker value {value:?}"),
        }
    }

    pub fn reset_to_today(&mut self) {
        self.date = Local::now().date_naive();
    }

    pub fn set_patient_name(&mut self, input: &str) {
        self.patient_name = normalize(input);
    }
}

/// One rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentRow {
    pub patient: PatientSummary,
    pub appointment_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub time: String,
}

impl AppointmentRow {
    /// What the prescription modal is bound to, for rows that have an id.
    pub fn prescription_target(&self) -> Option<PrescriptionTarget> {
        self.appointment_id.map(|appointment_id| PrescriptionTarget {
            appointment_id,
            patient_name: self.patient.name.clone(),
        })
    }
}

impl From<&Appointment> for AppointmentRow {
    fn from(appointment: &Appointment) -> Self {
        Self {
            patient: appointment.patient_summary(),
            appointment_id: appointment.id(),
            doctor_id: appointment.doctor_id(),
            time: appointment.time_label(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableState {
    Loading,
    Rows(Vec<AppointmentRow>),
    NoneForDate,
    FetchFailed,
}

impl TableState {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TableState::Loading | TableState::Rows(_) => None,
            TableState::NoneForDate => Some(NONE_FOR_DATE_MESSAGE),
            TableState::FetchFailed => Some(FETCH_FAILED_MESSAGE),
        }
    }
}

/// Fetch the table for `query` with the token currently stored. Without a
/// token nothing is sent.
pub async fn load_appointments<B, S>(backend: &B, store: &SessionStore<S>, query: &AppointmentQuery) -> TableState
where
    B: ClinicBackend,
    S: SessionStorage,
{
    let Some(token) = store.get_token() else {
        tracing::warn!("no token for doctor appointments");
        return TableState::FetchFailed;
    };
    match backend
        .doctor_appointments(query.date(), query.patient_name(), &token)
        .await
    {
        Ok(appointments) if appointments.is_empty() => TableState::NoneForDate,
        Ok(appointments) => TableState::Rows(appointments.iter().map(AppointmentRow::from).collect()),
        Err(e) => {
            tracing::error!("Error loading appointments: {e}");
            TableState::FetchFailed
        }
    }
}

#[component]
pub fn AppointmentTable() -> Element {
    let backend = use_backend();
    let modals = use_modals();
    let mut query = use_signal(AppointmentQuery::today);
    let mut search = use_signal(String::new);
    let mut table = use_signal(|| TableState::Loading);

    // Re-runs whenever the query changes.
    let _ = use_resource(move || {
        let backend = backend.clone();
        let query = query();
        async move {
            table.set(load_appointments(&backend, &session_store(), &query).await);
        }
    });

    let current = table();

    rsx! {
        div {
            class: "appointment-controls",
            div {
                class: "search-field",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                input {
                    id: "searchBar",
                    r#type: "text",
                    placeholder: "Search by patient name",
                    value: search(),
                    oninput: move |evt: FormEvent| {
                        search.set(evt.value());
                        query.write().set_patient_name(&evt.value());
                    },
                }
            }
            button {
                id: "todayButton",
                class: "dashboard-btn",
                onclick: move |_| query.write().reset_to_today(),
                Icon { icon: FaCalendarDay, width: 14, height: 14 }
                " Today"
            }
            input {
                id: "datePicker",
                r#type: "date",
                value: query().date_value(),
                onchange: move |evt: FormEvent| query.write().set_date(&evt.value()),
            }
        }
        table {
            id: "patientTable",
            class: "patient-table",
            thead {
                tr {
                    th { "Patient ID" }
                    th { "Name" }
                    th { "Phone" }
                    th { "Email" }
                    th { "Time" }
                    th { "Prescription" }
                }
            }
            tbody {
                match current {
                    TableState::Loading => rsx! {},
                    TableState::Rows(rows) => rsx! {
                        for (index, row) in rows.into_iter().enumerate() {
                            tr {
                                key: "{index}",
                                "data-appointment-id": row.appointment_id.map(|id| id.to_string()).unwrap_or_default(),
                                "data-doctor-id": row.doctor_id.map(|id| id.to_string()).unwrap_or_default(),
                                td { class: "patient-id", "{row.patient.id}" }
                                td { "{row.patient.name}" }
                                td { "{row.patient.phone}" }
                                td { "{row.patient.email}" }
                                td { "{row.time}" }
                                td {
                                    if let Some(target) = row.prescription_target() {
                                        button {
                                            class: "prescription-btn",
                                            title: "Add Prescription",
                                            onclick: move |_| modals.open(Modal::Prescription(target.clone())),
                                            Icon { icon: FaPrescription, width: 14, height: 14 }
                                            " Add Prescription"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    other => rsx! {
                        tr {
                            td {
                                colspan: "6",
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
    use crate::testing::FakeBackend;
    use api::ApiError;
    use store::{MemoryStorage, Role};

    fn doctor_session() -> SessionStore<MemoryStorage> {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session(Role::Doctor, "doc-tok");
        store
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_today_resets_date_and_picker_value() {
        let mut query = AppointmentQuery::today();
        let today = query.date_value();
        query.set_date("2020-05-17");
        assert_eq!(query.date_value(), "2020-05-17");

        query.reset_to_today();
        assert_eq!(query.date_value(), today);
        assert_eq!(query, AppointmentQuery::today());
    }

    #[test]
    fn test_bad_picker_value_keeps_date() {
        let mut query = AppointmentQuery::on(date("2025-01-02"));
        query.set_date("");
        assert_eq!(query.date(), date("2025-01-02"));
    }

    #[test]
    fn test_blank_name_is_unset() {
        let mut query = AppointmentQuery::on(date("2025-01-02"));
        query.set_patient_name("  ann ");
        assert_eq!(query.patient_name(), Some("ann"));
        query.set_patient_name("   ");
        assert_eq!(query.patient_name(), None);
    }

    #[tokio::test]
    async fn test_unset_name_sends_null_sentinel() {
        let backend = FakeBackend::default();
        let query = AppointmentQuery::on(date("2025-02-14"));

        let state = load_appointments(&backend, &doctor_session(), &query).await;
        assert_eq!(state, TableState::NoneForDate);
        assert_eq!(
            backend.calls(),
            vec!["doctor_appointments 2025-02-14 null doc-tok".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rows_default_missing_fields() {
        let appointment: Appointment =
            serde_json::from_value(serde_json::json!({ "id": 5, "patient": { "name": "Ann" } })).unwrap();
        let backend = FakeBackend {
            appointments: Ok(vec![appointment]),
            ..Default::default()
        };
        let mut query = AppointmentQuery::on(date("2025-02-14"));
        query.set_patient_name("Ann");

        let TableState::Rows(rows) = load_appointments(&backend, &doctor_session(), &query).await else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].appointment_id, Some(5));
        assert_eq!(rows[0].patient.id, "N/A");
        assert_eq!(rows[0].patient.name, "Ann");
        assert_eq!(rows[0].patient.phone, "-");
        assert_eq!(rows[0].patient.email, "-");
        assert_eq!(
            rows[0].prescription_target(),
            Some(PrescriptionTarget {
                appointment_id: 5,
                patient_name: "Ann".into(),
            })
        );
        assert_eq!(backend.calls(), vec!["doctor_appointments 2025-02-14 Ann doc-tok".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let backend = FakeBackend::default();
        let store = SessionStore::new(MemoryStorage::new());

        let state = load_appointments(&backend, &store, &AppointmentQuery::on(date("2025-02-14"))).await;
        assert_eq!(state, TableState::FetchFailed);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_has_its_own_message() {
        let backend = FakeBackend {
            appointments: Err(ApiError::Http {
                status: 500,
                message: None,
            }),
            ..Default::default()
        };
        let state = load_appointments(&backend, &doctor_session(), &AppointmentQuery::today()).await;
        assert_eq!(state, TableState::FetchFailed);
        assert_ne!(state.message(), TableState::NoneForDate.message());
    }
}
