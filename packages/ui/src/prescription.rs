//! Prescription modal opened from a row of the doctor's appointment table.
//!
//! An appointment carries at most one prescription. When one exists it is
//! shown read-only instead of the form.

use api::{ApiError, ClinicBackend, Prescription};
use dioxus::prelude::*;
use store::{SessionStorage, SessionStore};

use crate::auth_forms::Field;
use crate::modal::{use_modals, ModalController, PrescriptionTarget};
use crate::nav::{ROOT, SESSION_EXPIRED_MESSAGE};
use crate::provider::use_backend;
use crate::session::session_store;
use crate::shell::{BrowserShell, Shell};

pub const PRESCRIPTION_SAVED: &str = "Prescription saved successfully";
pub const PRESCRIPTION_LOAD_FAILED: &str = "Unable to load the prescription for this appointment.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrescriptionState {
    Loading,
    /// Nothing written yet; show the form.
    New,
    Existing(Prescription),
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrescriptionOutcome {
    Saved(String),
    Invalid,
    Rejected,
    /// No token any more; the session was sent back to the root.
    Redirected,
}

/// Look up the prescription already written for `appointment_id`, if any.
pub async fn load_prescription<B, S>(backend: &B, store: &SessionStore<S>, appointment_id: i64) -> PrescriptionState
where
    B: ClinicBackend,
    S: SessionStorage,
{
    let Some(token) = store.get_token() else {
        tracing::warn!("no token for prescription lookup");
        return PrescriptionState::Failed;
    };
    match backend.prescriptions(appointment_id, &token).await {
        Ok(found) => match found.into_iter().next() {
            Some(prescription) => PrescriptionState::Existing(prescription),
            None => PrescriptionState::New,
        },
        Err(e) => {
            tracing::error!("Failed to load prescription for appointment {appointment_id}: {e}");
            PrescriptionState::Failed
        }
    }
}

pub async fn submit_prescription<B, S>(
    backend: &B,
    store: &SessionStore<S>,
    shell: &impl Shell,
    modals: &impl ModalController,
    prescription: &Prescription,
) -> PrescriptionOutcome
where
    B: ClinicBackend,
    S: SessionStorage,
{
    if let Err(e) = prescription.validate() {
        shell.alert(&e.to_string());
        return PrescriptionOutcome::Invalid;
    }
    let Some(token) = store.get_token() else {
        store.clear();
        shell.alert(SESSION_EXPIRED_MESSAGE);
        shell.navigate(ROOT);
        return PrescriptionOutcome::Redirected;
    };

    match backend.save_prescription(prescription, &token).await {
        Ok(message) => {
            tracing::info!("prescription saved for appointment {}", prescription.appointment_id);
            let message = if message.is_empty() || message == "Saved" {
                PRESCRIPTION_SAVED.to_string()
            } else {
                message
            };
            shell.alert(&message);
            modals.close();
            PrescriptionOutcome::Saved(message)
        }
        Err(ApiError::Transport(reason)) => {
            tracing::error!("saving prescription failed: {reason}");
            shell.alert("An error occurred while saving prescription.");
            PrescriptionOutcome::Rejected
        }
        Err(e) => {
            tracing::warn!("prescription rejected: {e}");
            shell.alert(&e.user_message("Failed to save prescription."));
            PrescriptionOutcome::Rejected
        }
    }
}

#[component]
pub fn PrescriptionForm(target: PrescriptionTarget) -> Element {
    let backend = use_backend();
    let modals = use_modals();
    let medication = use_signal(String::new);
    let dosage = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let appointment_id = target.appointment_id;
    let lookup_backend = backend.clone();
    let existing = use_resource(move || {
        let backend = lookup_backend.clone();
        async move { load_prescription(&backend, &session_store(), appointment_id).await }
    });

    let patient_name = target.patient_name.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let mut prescription = Prescription::new(appointment_id, patient_name.clone());
        prescription.medication = medication();
        prescription.dosage = dosage();
        prescription.doctor_notes = api::normalize(&notes());
        spawn(async move {
            busy.set(true);
            submit_prescription(&backend, &session_store(), &BrowserShell, &modals, &prescription).await;
            busy.set(false);
        });
    };

    let state = existing().unwrap_or(PrescriptionState::Loading);

    rsx! {
        div {
            class: "p-6 prescription",
            h2 { class: "m-0 mb-5 text-lg font-semibold", "Prescription" }
            p { class: "mb-4", "Patient: {target.patient_name}" }
            match state {
                PrescriptionState::Loading => rsx! { p { class: "muted", "Loading..." } },
                PrescriptionState::Failed => rsx! { p { "{PRESCRIPTION_LOAD_FAILED}" } },
                PrescriptionState::Existing(prescription) => rsx! {
                    dl {
                        class: "prescription-details",
                        dt { "Medication" }
                        dd { "{prescription.medication}" }
                        dt { "Dosage" }
                        dd { "{prescription.dosage}" }
                        if let Some(doctor_notes) = prescription.doctor_notes {
                            dt { "Notes" }
                            dd { "{doctor_notes}" }
                        }
                    }
                },
                PrescriptionState::New => rsx! {
                    form {
                        onsubmit: on_submit,
                        Field { id: "medication", label: "Medication", value: medication }
                        Field { id: "dosage", label: "Dosage", value: dosage }
                        div {
                            class: "mb-4",
                            label { r#for: "notes", "Notes" }
                            textarea {
                                id: "notes",
                                class: "input-field",
                                rows: "3",
                                value: notes(),
                                oninput: move |evt: FormEvent| notes.set(evt.value()),
                            }
                        }
                        button {
                            class: "dashboard-btn",
                            r#type: "submit",
                            disabled: busy(),
                            "Save Prescription"
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBackend, RecordingModals, RecordingShell};
    use store::{MemoryStorage, Role, Session};

    fn doctor_session() -> SessionStore<MemoryStorage> {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session(Role::Doctor, "doc-tok");
        store
    }

    fn written(appointment_id: i64) -> Prescription {
        let mut prescription = Prescription::new(appointment_id, "Ann Lee");
        prescription.medication = "Ibuprofen".into();
        prescription.dosage = "200mg".into();
        prescription
    }

    #[tokio::test]
    async fn test_save_closes_modal() {
        let backend = FakeBackend {
            prescribed: Ok("Saved".into()),
            ..Default::default()
        };
        let shell = RecordingShell::default();
        let modals = RecordingModals::default();

        let outcome = submit_prescription(&backend, &doctor_session(), &shell, &modals, &written(12)).await;
        assert_eq!(outcome, PrescriptionOutcome::Saved(PRESCRIPTION_SAVED.into()));
        assert_eq!(backend.calls(), vec!["save_prescription 12 Ibuprofen doc-tok".to_string()]);
        assert_eq!(modals.closed(), 1);
    }

    #[tokio::test]
    async fn test_incomplete_form_sends_nothing() {
        let backend = FakeBackend::default();
        let shell = RecordingShell::default();
        let modals = RecordingModals::default();

        let outcome = submit_prescription(
            &backend,
            &doctor_session(),
            &shell,
            &modals,
            &Prescription::new(12, "Ann Lee"),
        )
        .await;
        assert_eq!(outcome, PrescriptionOutcome::Invalid);
        assert_eq!(shell.alerts(), vec!["Medication is required".to_string()]);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_keeps_modal_open() {
        let backend = FakeBackend {
            prescribed: Err(ApiError::Http {
                status: 409,
                message: Some("Prescription already exists for appointment".into()),
            }),
            ..Default::default()
        };
        let shell = RecordingShell::default();
        let modals = RecordingModals::default();

        let outcome = submit_prescription(&backend, &doctor_session(), &shell, &modals, &written(12)).await;
        assert_eq!(outcome, PrescriptionOutcome::Rejected);
        assert_eq!(
            shell.alerts(),
            vec!["Prescription already exists for appointment".to_string()]
        );
        assert_eq!(modals.closed(), 0);
    }

    #[tokio::test]
    async fn test_lost_session_redirects_to_root() {
        let backend = FakeBackend::default();
        let store = SessionStore::new(MemoryStorage::new());
        let shell = RecordingShell::default();
        let modals = RecordingModals::default();

        let outcome = submit_prescription(&backend, &store, &shell, &modals, &written(12)).await;
        assert_eq!(outcome, PrescriptionOutcome::Redirected);
        assert_eq!(shell.navigations(), vec![ROOT.to_string()]);
        assert_eq!(store.session(), Session::default());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_existing_prescription_is_shown() {
        let backend = FakeBackend {
            prescriptions: Ok(vec![written(12)]),
            ..Default::default()
        };
        let state = load_prescription(&backend, &doctor_session(), 12).await;
        assert_eq!(state, PrescriptionState::Existing(written(12)));
        assert_eq!(backend.calls(), vec!["prescriptions 12 doc-tok".to_string()]);

        let empty = FakeBackend::default();
        assert_eq!(load_prescription(&empty, &doctor_session(), 12).await, PrescriptionState::New);
    }
}
