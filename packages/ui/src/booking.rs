//! Booking overlay bound to a {doctor, patient} pair.

use api::{BookingRequest, ClinicBackend};
use chrono::NaiveDate;
use dioxus::prelude::*;
use store::{SessionStorage, SessionStore};

use crate::doctor_card::PATIENT_SESSION_MISSING;
use crate::modal::{use_modals, BookingTarget, ModalController};
use crate::nav::PATIENT_DASHBOARD;
use crate::provider::use_backend;
use crate::session::session_store;
use crate::shell::{BrowserShell, Shell};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Booked; carries the server's confirmation.
    Booked(String),
    /// Local input was incomplete; nothing was sent.
    Invalid,
    /// The backend refused or could not be reached. The overlay stays open.
    Rejected,
    /// No token any more; the patient was sent to the patient dashboard.
    Redirected,
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Book `slot` on `date` for the overlay's pair.
pub async fn submit_booking<B, S>(
    backend: &B,
    store: &SessionStore<S>,
    shell: &impl Shell,
    modals: &impl ModalController,
    target: &BookingTarget,
    date: Option<NaiveDate>,
    slot: &str,
) -> BookingOutcome
where
    B: ClinicBackend,
    S: SessionStorage,
{
    let Some(date) = date else {
        shell.alert("Please select a date");
        return BookingOutcome::Invalid;
    };
    let request = match BookingRequest::new(target.doctor.id, target.patient.id, date, slot) {
        Ok(request) => request,
        Err(e) => {
            shell.alert(&e.to_string());
            return BookingOutcome::Invalid;
        }
    };
    let Some(token) = store.get_token() else {
        shell.alert(PATIENT_SESSION_MISSING);
        shell.navigate(PATIENT_DASHBOARD);
        return BookingOutcome::Redirected;
    };

    match backend.book_appointment(&request, &token).await {
        Ok(message) => {
            tracing::info!(
                "booked doctor {} at {}",
                target.doctor.id,
                request.appointment_time
            );
            let message = if message.is_empty() {
                "Appointment booked successfully".to_string()
            } else {
                message
            };
            shell.alert(&message);
            modals.close();
            BookingOutcome::Booked(message)
        }
        Err(e) => {
            tracing::warn!("booking failed: {e}");
            shell.alert(&e.user_message("Failed to book appointment."));
            BookingOutcome::Rejected
        }
    }
}

#[component]
pub fn BookingOverlay(target: BookingTarget) -> Element {
    let backend = use_backend();
    let modals = use_modals();
    let mut date = use_signal(String::new);
    let mut slot = use_signal(|| target.doctor.available_times.first().cloned().unwrap_or_default());
    let mut busy = use_signal(|| false);

    let booking = target.clone();
    let on_confirm = move |_| {
        let backend = backend.clone();
        let booking = booking.clone();
        async move {
            busy.set(true);
            submit_booking(
                &backend,
                &session_store(),
                &BrowserShell,
                &modals,
                &booking,
                parse_date(&date()),
                &slot(),
            )
            .await;
            busy.set(false);
        }
    };

    rsx! {
        div {
            class: "p-6 booking-overlay",
            h2 { class: "m-0 mb-5 text-lg font-semibold", "Book an Appointment" }
            div {
                class: "mb-4",
                label { r#for: "booking-doctor", "Doctor" }
                input {
                    id: "booking-doctor",
                    class: "input-field",
                    readonly: true,
                    value: "{target.doctor.display_name()} ({target.doctor.specialty})",
                }
            }
            div {
                class: "mb-4",
                label { r#for: "booking-patient", "Patient" }
                input {
                    id: "booking-patient",
                    class: "input-field",
                    readonly: true,
                    value: "{target.patient.name}",
                }
            }
            div {
                class: "mb-4",
                label { r#for: "booking-date", "Date" }
                input {
                    id: "booking-date",
                    class: "input-field",
                    r#type: "date",
                    value: date(),
                    oninput: move |evt: FormEvent| date.set(evt.value()),
                }
            }
            div {
                class: "mb-4",
                label { r#for: "booking-slot", "Time" }
                if target.doctor.available_times.is_empty() {
                    p { class: "muted", "No available times" }
                } else {
                    select {
                        id: "booking-slot",
                        class: "input-field",
                        value: slot(),
                        onchange: move |evt: FormEvent| slot.set(evt.value()),
                        for time in target.doctor.available_times.iter() {
                            option { key: "{time}", value: "{time}", "{time}" }
                        }
                    }
                }
            }
            div {
                class: "flex gap-2 mt-5",
                button {
                    class: "dashboard-btn",
                    disabled: busy(),
                    onclick: on_confirm,
                    "Confirm Booking"
                }
                button {
                    class: "dashboard-btn dashboard-btn--outline",
                    onclick: move |_| modals.close(),
                    "Cancel"
                }
            }
        }
    }
}
