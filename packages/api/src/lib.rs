//! # API crate — REST client for the clinic backend
//!
//! Stateless request functions per resource (doctors, appointments, patients,
//! auth). The crate shapes every backend call and normalizes responses and
//! errors so views only ever see typed results.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ClinicBackend`] trait and the reqwest-backed [`HttpBackend`] |
//! | [`endpoints`] | URL construction, [`DoctorFilter`] normalization and the two "unset" sentinels |
//! | [`models`] | [`Doctor`], [`Patient`], [`Appointment`] and request payloads |
//! | [`error`] | [`ApiError`] |
//!
//! ## Backend surface
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | list doctors | GET | `/doctor` |
//! | filter doctors | GET | `/doctor/filter/{name}/{time}/{specialty}` |
//! | save doctor | POST | `/doctor/{token}` |
//! | delete doctor | DELETE | `/doctor/{id}/{token}` |
//! | admin / doctor / patient login | POST | `/{admin,doctor,patient}/login` |
//! | patient signup | POST | `/patient` |
//! | patient profile | GET | `/patient/{token}` |
//! | doctor's appointments | GET | `/appointments/{date}/{name}/{token}` |
//! | patient's appointments | GET | `/patient/{id}/patient/{token}` |
//! | book appointment | POST | `/appointments/{token}` |
//! | filter patient's appointments | GET | `/patient/filter/{condition}/{name}/{token}` |
//! | save prescription | POST | `/prescription/{token}` |
//! | appointment's prescriptions | GET | `/prescription/{appointmentId}/{token}` |

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod responses;

pub use client::{ClinicBackend, Credentials, HttpBackend, SignupOutcome};
pub use endpoints::{
    normalize, AppointmentCondition, DoctorFilter, Endpoints, LoginKind, PatientAppointmentFilter,
    APPOINTMENT_NAME_UNSET, DOCTOR_FILTER_UNSET, PATIENT_FILTER_UNSET,
};
pub use error::ApiError;
pub use models::{
    Appointment, BookingRequest, Doctor, NewDoctor, NewPatient, Patient, PatientSummary,
    Prescription,
};
