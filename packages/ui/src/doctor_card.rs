//! Doctor card with role-gated actions.
//!
//! Admins get a delete button, anonymous visitors and patients a book
//! button, doctors nothing. The workflows behind the buttons are plain async
//! functions over the capability traits; [`DoctorCard`] only wires them to the
//! live context.

use api::{ClinicBackend, Doctor};
use dioxus::prelude::*;
use store::{Role, SessionStorage, SessionStore};

use crate::icons::{FaCalendarPlus, FaEnvelope, FaStethoscope, FaTrash};
use crate::modal::{use_modals, BookingTarget, Modal, ModalController};
use crate::nav::PATIENT_DASHBOARD;
use crate::provider::use_backend;
use crate::session::session_store;
use crate::shell::{BrowserShell, Shell};
use crate::Icon;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this doctor?";
pub const ADMIN_TOKEN_MISSING: &str = "Admin token not found. Please login.";
pub const PATIENT_SESSION_MISSING: &str = "Session expired or not logged in.";

/// Who is booking: an anonymous (patient-flavored) visitor or a logged-in patient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Booker {
    Guest,
    Patient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Delete,
    Book(Booker),
}

/// The action a card offers to `role`.
pub fn card_action(role: Role) -> Option<CardAction> {
    match role {
        Role::Admin => Some(CardAction::Delete),
        Role::Patient | Role::None => Some(CardAction::Book(Booker::Guest)),
        Role::LoggedPatient => Some(CardAction::Book(Booker::Patient)),
        Role::Doctor => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The backend deleted the doctor; drop the card.
    Removed,
    /// The backend refused; the card stays.
    Kept,
    /// Nothing was sent.
    Aborted,
}

/// Delete a doctor as admin. The token is checked before asking for
/// confirmation.
pub async fn delete_doctor<B, S>(
    backend: &B,
    store: &SessionStore<S>,
    shell: &impl Shell,
    doctor_id: i64,
) -> DeleteOutcome
where
    B: ClinicBackend,
    S: SessionStorage,
{
    let Some(token) = store.get_token() else {
        shell.alert(ADMIN_TOKEN_MISSING);
        return DeleteOutcome::Aborted;
    };
    if !shell.confirm(DELETE_CONFIRMATION) {
        return DeleteOutcome::Aborted;
    }

    match backend.delete_doctor(doctor_id, &token).await {
        Ok(_) => {
            tracing::info!("deleted doctor {doctor_id}");
            shell.alert("Doctor deleted");
            DeleteOutcome::Removed
        }
        Err(e) => {
            tracing::warn!("delete of doctor {doctor_id} failed: {e}");
            shell.alert(&format!("Failed to delete doctor: {}", e.user_message(&e.to_string())));
            DeleteOutcome::Kept
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookOutcome {
    /// The booking overlay is open.
    Opened,
    /// No token: the patient login modal was opened instead.
    LoginPrompted,
    /// A logged-in patient without a token was sent back to the patient dashboard.
    Redirected,
    /// The profile could not be fetched.
    Failed,
}

/// Start booking `doctor`: resolve the acting patient and open the overlay.
pub async fn book_doctor<B, S>(
    backend: &B,
    store: &SessionStore<S>,
    shell: &impl Shell,
    modals: &impl ModalController,
    booker: Booker,
    doctor: &Doctor,
) -> BookOutcome
where
    B: ClinicBackend,
    S: SessionStorage,
{
    let Some(token) = store.get_token() else {
        return match booker {
            Booker::Guest => {
                modals.open(Modal::PatientLogin);
                BookOutcome::LoginPrompted
            }
            Booker::Patient => {
                shell.alert(PATIENT_SESSION_MISSING);
                shell.navigate(PATIENT_DASHBOARD);
                BookOutcome::Redirected
            }
        };
    };

    let failure = match booker {
        Booker::Guest => "Unable to fetch patient data. Please login again.",
        Booker::Patient => "Unable to fetch patient data.",
    };
    match backend.patient_profile(&token).await {
        Ok(Some(patient)) => {
            modals.open(Modal::Booking(Box::new(BookingTarget {
                doctor: doctor.clone(),
                patient,
            })));
            BookOutcome::Opened
        }
        Ok(None) => {
            shell.alert(failure);
            BookOutcome::Failed
        }
        Err(e) => {
            tracing::error!("Failed to fetch patient profile: {e}");
            shell.alert(failure);
            BookOutcome::Failed
        }
    }
}

/// A single doctor in the listing. `on_removed` fires with the doctor's id
/// after a successful delete.
#[component]
pub fn DoctorCard(doctor: Doctor, on_removed: EventHandler<i64>) -> Element {
    let backend = use_backend();
    let modals = use_modals();
    let mut busy = use_signal(|| false);
    let action = card_action(session_store().get_role());
    let id = doctor.id;

    let delete_backend = backend.clone();
    let on_delete = move |_| {
        let backend = delete_backend.clone();
        async move {
            busy.set(true);
            let outcome = delete_doctor(&backend, &session_store(), &BrowserShell, id).await;
            busy.set(false);
            if outcome == DeleteOutcome::Removed {
                on_removed.call(id);
            }
        }
    };

    let target = doctor.clone();
    let on_book = move |booker: Booker| {
        let backend = backend.clone();
        let target = target.clone();
        async move {
            busy.set(true);
            book_doctor(&backend, &session_store(), &BrowserShell, &modals, booker, &target).await;
            busy.set(false);
        }
    };

    rsx! {
        div {
            class: "doctor-card",
            div {
                class: "doctor-info",
                h3 { "{doctor.display_name()}" }
                p {
                    class: "doctor-specialty",
                    Icon { icon: FaStethoscope, width: 12, height: 12 }
                    " {doctor.specialty}"
                }
                p {
                    class: "doctor-email",
                    Icon { icon: FaEnvelope, width: 12, height: 12 }
                    " {doctor.email}"
                }
                div {
                    class: "available-times",
                    if doctor.available_times.is_empty() {
                        "No available times"
                    } else {
                        ul {
                            for slot in doctor.available_times.iter() {
                                li { key: "{slot}", "{slot}" }
                            }
                        }
                    }
                }
            }
            div {
                class: "card-actions",
                match action {
                    Some(CardAction::Delete) => rsx! {
                        button {
                            class: "adminBtn",
                            disabled: busy(),
                            onclick: on_delete,
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            " Delete"
                        }
                    },
                    Some(CardAction::Book(booker)) => rsx! {
                        button {
                            class: "adminBtn",
                            disabled: busy(),
                            onclick: move |_| on_book(booker),
                            Icon { icon: FaCalendarPlus, width: 12, height: 12 }
                            " Book Now"
                        }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
