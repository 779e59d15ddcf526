use dioxus::prelude::*;
use ui::{is_stored_token, session_store, AppointmentTable};

/// Doctor landing page: the day's appointments.
#[component]
pub fn DoctorDashboard(token: String) -> Element {
    use_hook(|| {
        if !is_stored_token(&session_store(), &token) {
            tracing::warn!("doctor dashboard opened with a token that is not the stored one");
        }
    });

    rsx! {
        h2 { class: "page-title", "Patient Appointments" }
        AppointmentTable {}
    }
}
