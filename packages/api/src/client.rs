//! # Clinic backend client
//!
//! [`ClinicBackend`] is the async seam between the views and the REST backend.
//! Views are generic over it, so tests drive them with scripted fakes while
//! the app uses [`HttpBackend`].
//!
//! [`HttpBackend`] is stateless apart from a reusable `reqwest::Client` (the
//! browser `fetch` API on wasm). Each method builds its URL through
//! [`Endpoints`], sends one request, and normalizes the response:
//!
//! - non-success status → [`ApiError::Http`] carrying the server message if any
//! - network failure or undecodable body → [`ApiError::Transport`]
//! - auth success without a token → [`ApiError::MissingToken`]
//!
//! No request has a timeout or cancellation; callers render whatever arrives.

use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::endpoints::{DoctorFilter, Endpoints, LoginKind, PatientAppointmentFilter};
use crate::models::{
    Appointment, BookingRequest, Doctor, NewDoctor, NewPatient, Patient, Prescription,
};
use crate::responses::{
    error_message, AppointmentsBody, DoctorsBody, MessageBody, PatientBody, PrescriptionsBody,
    TokenBody,
};
use crate::ApiError;

/// Login form contents. `identifier` is the username for admins and the
/// email address for doctors and patients.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self, kind: LoginKind) -> Result<(), ApiError> {
        let label = match kind {
            LoginKind::Admin => "Username",
            LoginKind::Doctor | LoginKind::Patient => "Email",
        };
        crate::models::require(&[(label, self.identifier.as_str()), ("Password", self.password.as_str())])
    }

    fn body(&self, kind: LoginKind) -> serde_json::Value {
        match kind {
            LoginKind::Admin => json!({ "username": self.identifier, "password": self.password }),
            LoginKind::Doctor | LoginKind::Patient => {
                json!({ "email": self.identifier, "password": self.password })
            }
        }
    }
}

/// Result of a successful signup. Some deployments log the patient straight
/// in and return a token; most only confirm.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupOutcome {
    pub message: String,
    pub token: Option<String>,
}

/// Async interface to the clinic REST backend.
pub trait ClinicBackend {
    /// `GET /doctor`
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError>;

    /// `GET /doctor/filter/{name}/{time}/{specialty}`; an unset filter is
    /// answered from the full roster.
    async fn filter_doctors(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, ApiError>;

    /// `POST /doctor/{token}`, returns the server message.
    async fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> Result<String, ApiError>;

    /// `DELETE /doctor/{id}/{token}`, returns the server message.
    async fn delete_doctor(&self, id: i64, token: &str) -> Result<String, ApiError>;

    /// `POST /{admin|doctor|patient}/login`, returns the token.
    async fn login(&self, kind: LoginKind, credentials: &Credentials) -> Result<String, ApiError>;

    /// `POST /patient`
    async fn signup_patient(&self, patient: &NewPatient) -> Result<SignupOutcome, ApiError>;

    /// `GET /patient/{token}`
    async fn patient_profile(&self, token: &str) -> Result<Option<Patient>, ApiError>;

    /// `GET /appointments/{date}/{name|null}/{token}`
    async fn doctor_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &str,
    ) -> Result<Vec<Appointment>, ApiError>;

    /// `GET /patient/{id}/patient/{token}`
    async fn patient_appointments(&self, patient_id: i64, token: &str) -> Result<Vec<Appointment>, ApiError>;

    /// `POST /appointments/{token}`, returns the server message.
    async fn book_appointment(&self, booking: &BookingRequest, token: &str) -> Result<String, ApiError>;

    /// `GET /patient/filter/{condition|null}/{name|null}/{token}`
    async fn filter_patient_appointments(
        &self,
        filter: &PatientAppointmentFilter,
        token: &str,
    ) -> Result<Vec<Appointment>, ApiError>;

    /// `POST /prescription/{token}`, returns the server message.
    async fn save_prescription(&self, prescription: &Prescription, token: &str) -> Result<String, ApiError>;

    /// `GET /prescription/{appointmentId}/{token}`
    async fn prescriptions(&self, appointment_id: i64, token: &str) -> Result<Vec<Prescription>, ApiError>;
}

/// reqwest-backed [`ClinicBackend`].
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::new(),
            endpoints: Endpoints::new(base_url)?,
        })
    }

    /// Backend at the default development address.
    pub fn localhost() -> Self {
        Self::new(&store::config::ApiConfig::default().base_url).expect("default base URL is valid")
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Send and return the body of a success response.
    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::debug!("backend answered {status}");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Transport(format!("invalid response body: {e}")))
    }

    async fn message(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let body = self.send(request).await?;
        let parsed: MessageBody = serde_json::from_str(&body).unwrap_or_default();
        Ok(parsed.message.unwrap_or_default())
    }
}

impl PartialEq for HttpBackend {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints == other.endpoints
    }
}

impl ClinicBackend for HttpBackend {
    async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        let body: DoctorsBody = self.fetch(self.client.get(self.endpoints.doctors())).await?;
        Ok(body.doctors)
    }

    async fn filter_doctors(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, ApiError> {
        if filter.is_unset() {
            return self.list_doctors().await;
        }
        let url = self.endpoints.doctor_filter(filter);
        let body: DoctorsBody = self.fetch(self.client.get(url)).await?;
        Ok(body.doctors)
    }

    async fn save_doctor(&self, doctor: &NewDoctor, token: &str) -> Result<String, ApiError> {
        doctor.validate()?;
        let url = self.endpoints.save_doctor(token);
        self.message(self.client.post(url).json(doctor)).await
    }

    async fn delete_doctor(&self, id: i64, token: &str) -> Result<String, ApiError> {
        let url = self.endpoints.delete_doctor(id, token);
        self.message(self.client.delete(url)).await
    }

    async fn login(&self, kind: LoginKind, credentials: &Credentials) -> Result<String, ApiError> {
        credentials.validate(kind)?;
        let url = self.endpoints.login(kind);
        let body: TokenBody = self
            .fetch(self.client.post(url).json(&credentials.body(kind)))
            .await?;
        body.token().map(String::from).ok_or(ApiError::MissingToken)
    }

    async fn signup_patient(&self, patient: &NewPatient) -> Result<SignupOutcome, ApiError> {
        patient.validate()?;
        let url = self.endpoints.patient_signup();
        let body = self.send(self.client.post(url).json(patient)).await?;
        let parsed: TokenBody = serde_json::from_str(&body).unwrap_or_default();
        Ok(SignupOutcome {
            token: parsed.token().map(String::from),
            message: parsed.message.unwrap_or_default(),
        })
    }

    async fn patient_profile(&self, token: &str) -> Result<Option<Patient>, ApiError> {
        let body: PatientBody = self
            .fetch(self.client.get(self.endpoints.patient_profile(token)))
            .await?;
        Ok(body.into_patient())
    }

    async fn doctor_appointments(
        &self,
        date: NaiveDate,
        patient_name: Option<&str>,
        token: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        let url = self.endpoints.doctor_appointments(date, patient_name, token);
        let body: AppointmentsBody = self.fetch(self.client.get(url)).await?;
        Ok(body.into_vec())
    }

    async fn patient_appointments(&self, patient_id: i64, token: &str) -> Result<Vec<Appointment>, ApiError> {
        let url = self.endpoints.patient_appointments(patient_id, token);
        let body: AppointmentsBody = self.fetch(self.client.get(url)).await?;
        Ok(body.into_vec())
    }

    async fn book_appointment(&self, booking: &BookingRequest, token: &str) -> Result<String, ApiError> {
        let url = self.endpoints.book_appointment(token);
        self.message(self.client.post(url).json(booking)).await
    }

    async fn filter_patient_appointments(
        &self,
        filter: &PatientAppointmentFilter,
        token: &str,
    ) -> Result<Vec<Appointment>, ApiError> {
        let url = self.endpoints.patient_appointment_filter(filter, token);
        let body: AppointmentsBody = self.fetch(self.client.get(url)).await?;
        Ok(body.into_vec())
    }

    async fn save_prescription(&self, prescription: &Prescription, token: &str) -> Result<String, ApiError> {
        prescription.validate()?;
        let url = self.endpoints.save_prescription(token);
        self.message(self.client.post(url).json(prescription)).await
    }

    async fn prescriptions(&self, appointment_id: i64, token: &str) -> Result<Vec<Prescription>, ApiError> {
        let url = self.endpoints.prescriptions(appointment_id, token);
        let body: PrescriptionsBody = self.fetch(self.client.get(url)).await?;
        Ok(body.prescriptions)
    }
}
