//! Data models exchanged with the clinic backend.

mod appointment;
mod doctor;
mod patient;
mod prescription;

pub use appointment::{Appointment, BookingRequest, DoctorRef, IdRef, PatientRef, PatientSummary};
pub use doctor::{Doctor, NewDoctor};
pub use patient::{NewPatient, Patient};
pub use prescription::Prescription;

/// Reject the first empty field, in the order given.
pub(crate) fn require(fields: &[(&str, &str)]) -> Result<(), crate::ApiError> {
    for (label, value) in fields {
        if value.trim().is_empty() {
            return Err(crate::ApiError::validation(format!("{label} is required")));
        }
    }
    Ok(())
}
