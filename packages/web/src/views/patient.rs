use dioxus::prelude::*;
use ui::{DoctorListing, PatientAppointmentsView};

/// Anonymous patient landing page.
#[component]
pub fn PatientDashboard() -> Element {
    rsx! {
        h2 { class: "page-title", "Find a Doctor" }
        DoctorListing {}
    }
}

#[component]
pub fn LoggedPatientHome() -> Element {
    rsx! {
        h2 { class: "page-title", "Book with a Doctor" }
        DoctorListing {}
    }
}

#[component]
pub fn PatientAppointments() -> Element {
    rsx! {
        PatientAppointmentsView {}
    }
}
