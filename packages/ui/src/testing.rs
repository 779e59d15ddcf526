//! In-memory stand-ins for the capabilities views depend on.

use std::cell::{Cell, RefCell};

use api::{
    ApiError, Appointment, BookingRequest, ClinicBackend, Credentials, Doctor, DoctorFilter,
    LoginKind, NewDoctor, NewPatient, Patient, PatientAppointmentFilter, Prescription,
    SignupOutcome, APPOINTMENT_NAME_UNSET, PATIENT_FILTER_UNSET,
};
use chrono::NaiveDate;

use crate::modal::{Modal, ModalController};
use crate::shell::Shell;

#[derive(Default)]
pub struct RecordingShell {
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    confirm_answer: Cell<bool>,
}

impl RecordingShell {
    pub fn confirming() -> Self {
        let shell = Self::default();
        shell.confirm_answer.set(true);
        shell
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Shell for RecordingShell {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}

#[derive(Default)]
pub struct RecordingModals {
    opened: RefCell<Vec<Modal>>,
    closed: Cell<usize>,
}

impl RecordingModals {
    pub fn opened(&self) -> Vec<Modal> {
        self.opened.borrow().clone()
    }

    pub fn closed(&self) -> usize {
        self.closed.get()
    }
}

impl ModalController for RecordingModals {
    fn open(&self, modal: Modal) {
        self.opened.borrow_mut().push(modal);
    }

    fn close(&self) {
        self.closed.set(self.closed.get() + 1);
    }
}

/// Scripted backend. Every call is recorded as a short descriptor.
pub struct FakeBackend {
    pub doctors: Result<Vec<Doctor>, ApiError>,
    pub filtered: Result<Vec<Doctor>, ApiError>,
    pub saved: Result<String, ApiError>,
    pub deleted: Result<String, ApiError>,
    pub token: Result<String, ApiError>,
    pub signup: Result<SignupOutcome, ApiError>,
    pub profile: Result<Option<Patient>, ApiError>,
    pub appointments: Result<Vec<Appointment>, ApiError>,
    pub booked: Result<String, ApiError>,
    pub prescriptions: Result<Vec<Prescription>, ApiError>,
    pub prescribed: Result<String, ApiError>,
    pub calls: RefCell<Vec<String>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            doctors: Ok(Vec::new()),
            filtered: Ok(Vec::new()),
            saved: Ok(String::new()),
            deleted: Ok(String::new()),
            token: Ok("token".to_string()),
            signup: Ok(SignupOutcome::default()),
            profile: Ok(None),
            appointments: Ok(Vec::new()),
            booked: Ok(String::new()),
            prescriptions: Ok(Vec::new()),
            prescribed: Ok(String::new()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

pub fn doctor(id: i64, name: &str) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialty: "General".to_string(),
        email: format!("doctor{id}@clinic.org"),
        available_times: vec!["09:00-10:00".to_string(), "10:00-11:00".to_string()],
    }
}

pub fn patient(id: i64) -> Patient {
    Patient {
        id,
        name: "Ann Lee".to_string(),
        phone: "5551234".to_string(),
        email: "ann@example.org".to_string(),
        address: None,
    }
}

impl ClinicBackend for FakeBackend {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.record("list_doctors".into());
        self.doctors.clone()
    }

    async fn filter_doctors(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, ApiError> {
        self.record(format!(
            "filter_doctors {:?} {:?} {:?}",
            filter.name(),
            filter.time(),
            filter.specialty()
        ));
        self.filtered.clone()
    }

    async fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> Result<String, ApiError> {
        self.record(format!("save_doctor {} {token}", doctor.name));
        self.saved.clone()
    }

    async fn delete_doctor(&self, id: i64, token: &str) -> Result<String, ApiError> {
        self.record(format!("delete_doctor {id} {token}"));
        self.deleted.clone()
    }

    async fn login(&self, kind: LoginKind, credentials: &Credentials) -> Result<String, ApiError> {
        self.record(format!("login {kind:?} {}", credentials.identifier));
        self.token.clone()
    }

    async fn signup_patient(&self, patient: &NewPatient) -> Result<SignupOutcome, ApiError> {
        self.record(format!("signup_patient {}", patient.email));
        self.signup.clone()
    }

    async fn patient_profile(&self, token: &str) -> Result<Option<Patient>, ApiError> {
        self.record(format!("patient_profile {token}"));
        self.profile.clone()
    }

    async fn doctor_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.record(format!(
            "doctor_appointments {date} {} {token}",
            patient_name.unwrap_or(APPOINTMENT_NAME_UNSET)
        ));
        self.appointments.clone()
    }

    async fn patient_appointments(&self, patient_id: i64, token: &str) -> Result<Vec<Appointment>, ApiError> {
        self.record(format!("patient_appointments {patient_id} {token}"));
        self.appointments.clone()
    }

    async fn book_appointment(&self, booking: &BookingRequest, token: &str) -> Result<String, ApiError> {
        self.record(format!(
            "book_appointment {} {} {} {token}",
            booking.doctor.id, booking.patient.id, booking.appointment_time
        ));
        self.booked.clone()
    }

    async fn filter_patient_appointments(
        &self,
        filter: &PatientAppointmentFilter,
        token: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.record(format!(
            "filter_patient_appointments {} {} {token}",
            filter.condition().map(|c| c.as_str()).unwrap_or(PATIENT_FILTER_UNSET),
            filter.doctor_name().unwrap_or(PATIENT_FILTER_UNSET)
        ));
        self.appointments.clone()
    }

    async fn save_prescription(&self, prescription: &Prescription, token: &str) -> Result<String, ApiError> {
        self.record(format!(
            "save_prescription {} {} {token}",
            prescription.appointment_id, prescription.medication
        ));
        self.prescribed.clone()
    }

    async fn prescriptions(&self, appointment_id: i64, token: &str) -> Result<Vec<Prescription>, ApiError> {
        self.record(format!("prescriptions {appointment_id} {token}"));
        self.prescriptions.clone()
    }
}
