//! This crate contains all shared UI for the clinic frontend.
//!
//! Components read the session at the moment they render or act, through
//! [`session_store`], and reach the backend, the modal slot and the browser
//! through injected capabilities ([`ClinicBackend`](api::ClinicBackend),
//! [`ModalController`], [`Shell`]). The workflow behind every button is a
//! plain async function over those capabilities.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;
pub use views::{select_role, ModalOverlay, RoleSelectionView};

pub const CLINIC_CSS: Asset = asset!("/assets/clinic.css");

pub mod nav;

mod shell;
pub use shell::{BrowserShell, Shell};

mod modal;
pub use modal::{
    use_doctors_reload, use_modals, use_register_role_selector, use_role_selector, BookingTarget,
    DoctorsReload, Modal, ModalController, Modals, PrescriptionTarget, RoleSelector,
    RoleSelectorSlot,
};

mod session;
pub use session::{enforce_session, is_stored_token, session_store, SessionGate};

mod provider;
pub use provider::{use_backend, use_config, ClinicProvider};

pub mod header;
pub use header::Header;

pub mod doctor_card;
pub use doctor_card::DoctorCard;

pub mod doctor_listing;
pub use doctor_listing::DoctorListing;

pub mod booking;
pub use booking::BookingOverlay;

pub mod appointments;
pub use appointments::AppointmentTable;

pub mod prescription;
pub use prescription::PrescriptionForm;

pub mod patient_appointments;
pub use patient_appointments::PatientAppointmentsView;

pub mod auth_forms;
pub use auth_forms::{AddDoctorForm, LoginForm, ModalHost, SignupForm};

#[cfg(test)]
mod testing;
