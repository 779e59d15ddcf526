//! Login, signup and add-doctor modals, and the host that renders whichever
//! modal is open.
//!
//! Every form validates locally before sending anything. On success the
//! session is persisted first, then the user is moved to the role's landing
//! page: through the in-page [`RoleSelector`] when the current page provides
//! one, by hard navigation otherwise.

use api::{ApiError, ClinicBackend, Credentials, LoginKind, NewDoctor, NewPatient};
use dioxus::prelude::*;
use store::{Role, SessionStorage, SessionStore};

use crate::booking::BookingOverlay;
use crate::prescription::PrescriptionForm;
use crate::modal::{
    use_doctors_reload, use_modals, use_role_selector, Modal, ModalController, RoleSelector,
};
use crate::nav::dashboard_url;
use crate::provider::{use_backend, use_config};
use crate::session::session_store;
use crate::shell::{BrowserShell, Shell};
use crate::views::ModalOverlay;

pub const ADMIN_TOKEN_REQUIRED: &str = "Admin token not found. Please log in as admin.";

fn kind_label(kind: LoginKind) -> &'static str {
    match kind {
        LoginKind::Admin => "admin",
        LoginKind::Doctor => "doctor",
        LoginKind::Patient => "patient",
    }
}

/// Where a successful authentication sends the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Hand the role to the page's role selector.
    SelectRole(Role),
    /// Hard-navigate to a dashboard URL.
    Navigate(String),
}

pub fn transition_for(role: Role, token: &str, selector_present: bool) -> Transition {
    if selector_present {
        Transition::SelectRole(role)
    } else {
        Transition::Navigate(dashboard_url(role, token))
    }
}

fn apply_transition(transition: Transition, selector: Option<RoleSelector>, shell: &impl Shell) {
    match (transition, selector) {
        (Transition::SelectRole(role), Some(RoleSelector(select))) => select.call(role),
        (Transition::SelectRole(role), None) => {
            let token = session_store().get_token().unwrap_or_default();
            shell.navigate(&dashboard_url(role, &token));
        }
        (Transition::Navigate(url), _) => shell.navigate(&url),
    }
}

/// Log in and persist the session. Returns the new role, or `None` after
/// telling the user why not.
pub async fn submit_login<B, S>(
    backend: &B,
    store: &SessionStore<S>,
    shell: &impl Shell,
    modals: &impl ModalController,
    kind: LoginKind,
    credentials: &Credentials,
) -> Option<Role>
where
    B: ClinicBackend,
    S: SessionStorage,
{
    if let Err(e) = credentials.validate(kind) {
        shell.alert(&e.to_string());
        return None;
    }

    match backend.login(kind, credentials).await {
        Ok(token) => {
            let role = kind.role();
            store.set_session(role, &token);
            modals.close();
            Some(role)
        }
        Err(ApiError::Transport(reason)) => {
            tracing::error!("{} login failed: {reason}", kind_label(kind));
            shell.alert(&format!("An error occurred during {} login.", kind_label(kind)));
            None
        }
        Err(e) => {
            tracing::warn!("{} login rejected: {e}", kind_label(kind));
            shell.alert(&e.user_message(&format!("Invalid {} credentials", kind_label(kind))));
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupStep {
    /// The backend logged the new patient in.
    LoggedIn,
    /// Account created; the patient login modal is open.
    LoginRequired,
    Failed,
}

pub async fn submit_signup<B, S>(
    backend: &B,
    store: &SessionStore<S>,
    shell: &impl Shell,
    modals: &impl ModalController,
    patient: &NewPatient,
) -> SignupStep
where
    B: ClinicBackend,
    S: SessionStorage,
{
    if let Err(e) = patient.validate() {
        shell.alert(&e.to_string());
        return SignupStep::Failed;
    }

    match backend.signup_patient(patient).await {
        Ok(outcome) => {
            let message = if outcome.message.is_empty() {
                "Signup successful".to_string()
            } else {
                outcome.message
            };
            match outcome.token {
                Some(token) => {
                    store.set_session(Role::LoggedPatient, &token);
                    modals.close();
                    shell.alert(&message);
                    SignupStep::LoggedIn
                }
                None => {
                    shell.alert(&message);
                    modals.open(Modal::PatientLogin);
                    SignupStep::LoginRequired
                }
            }
        }
        Err(ApiError::Transport(reason)) => {
            tracing::error!("signup failed: {reason}");
            shell.alert("An error occurred during signup.");
            SignupStep::Failed
        }
        Err(e) => {
            shell.alert(&e.user_message("Signup failed."));
            SignupStep::Failed
        }
    }
}

/// Save a new doctor as admin. Returns whether the roster needs a reload.
pub async fn submit_add_doctor<B, S>(
    backend: &B,
    store: &SessionStore<S>,
    shell: &impl Shell,
    modals: &impl ModalController,
    doctor: &NewDoctor,
) -> bool
where
    B: ClinicBackend,
    S: SessionStorage,
{
    if let Err(e) = doctor.validate() {
        shell.alert(&e.to_string());
        return false;
    }
    let Some(token) = store.get_token() else {
        shell.alert(ADMIN_TOKEN_REQUIRED);
        return false;
    };

    match backend.save_doctor(doctor, &token).await {
        Ok(_) => {
            tracing::info!("added doctor {}", doctor.email);
            shell.alert("Doctor added successfully");
            modals.close();
            true
        }
        Err(ApiError::Transport(reason)) => {
            tracing::error!("adding doctor failed: {reason}");
            shell.alert("An error occurred while adding doctor.");
            false
        }
        Err(e) => {
            shell.alert(&format!("Failed to add doctor: {}", e.user_message(&e.to_string())));
            false
        }
    }
}

#[component]
pub(crate) fn Field(id: String, label: String, value: Signal<String>, #[props(default = "text".to_string())] kind: String) -> Element {
    let mut value = value;
    rsx! {
        div {
            class: "mb-4",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: "input-field",
                r#type: "{kind}",
                placeholder: "{label}",
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
        }
    }
}

#[component]
pub fn LoginForm(kind: LoginKind) -> Element {
    let backend = use_backend();
    let modals = use_modals();
    let selector = use_role_selector();
    let identifier = use_signal(String::new);
    let password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let (title, identifier_label) = match kind {
        LoginKind::Admin => ("Admin Login", "Username"),
        LoginKind::Doctor => ("Doctor Login", "Email"),
        LoginKind::Patient => ("Patient Login", "Email"),
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            busy.set(true);
            let credentials = Credentials::new(identifier(), password());
            let store = session_store();
            if let Some(role) = submit_login(&backend, &store, &BrowserShell, &modals, kind, &credentials).await {
                let token = store.get_token().unwrap_or_default();
                apply_transition(transition_for(role, &token, selector.is_some()), selector, &BrowserShell);
            }
            busy.set(false);
        });
    };

    rsx! {
        form {
            class: "p-6",
            onsubmit: on_submit,
            h2 { class: "m-0 mb-5 text-lg font-semibold", "{title}" }
            Field { id: "login-identifier", label: identifier_label, value: identifier }
            Field { id: "login-password", label: "Password", value: password, kind: "password" }
            button {
                class: "dashboard-btn",
                r#type: "submit",
                disabled: busy(),
                "Login"
            }
        }
    }
}

#[component]
pub fn SignupForm() -> Element {
    let backend = use_backend();
    let modals = use_modals();
    let selector = use_role_selector();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let phone = use_signal(String::new);
    let address = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            busy.set(true);
            let patient = NewPatient {
                name: name(),
                email: email(),
                password: password(),
                phone: phone(),
                address: address(),
            };
            let store = session_store();
            let step = submit_signup(&backend, &store, &BrowserShell, &modals, &patient).await;
            if step == SignupStep::LoggedIn {
                let token = store.get_token().unwrap_or_default();
                apply_transition(
                    transition_for(Role::LoggedPatient, &token, selector.is_some()),
                    selector,
                    &BrowserShell,
                );
            }
            busy.set(false);
        });
    };

    rsx! {
        form {
            class: "p-6",
            onsubmit: on_submit,
            h2 { class: "m-0 mb-5 text-lg font-semibold", "Patient Signup" }
            Field { id: "signup-name", label: "Name", value: name }
            Field { id: "signup-email", label: "Email", value: email, kind: "email" }
            Field { id: "signup-password", label: "Password", value: password, kind: "password" }
            Field { id: "signup-phone", label: "Phone", value: phone }
            Field { id: "signup-address", label: "Address", value: address }
            button {
                class: "dashboard-btn",
                r#type: "submit",
                disabled: busy(),
                "Signup"
            }
        }
    }
}

#[component]
pub fn AddDoctorForm() -> Element {
    let backend = use_backend();
    let config = use_config();
    let modals = use_modals();
    let reload = use_doctors_reload();
    let name = use_signal(String::new);
    let specialty = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let phone = use_signal(String::new);
    let slots = use_signal(Vec::<String>::new);
    let mut busy = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            busy.set(true);
            let doctor = NewDoctor {
                name: name(),
                specialty: specialty(),
                email: email(),
                password: password(),
                phone: phone(),
                available_times: slots(),
            };
            if submit_add_doctor(&backend, &session_store(), &BrowserShell, &modals, &doctor).await {
                reload.bump();
            }
            busy.set(false);
        });
    };

    rsx! {
        form {
            class: "p-6",
            onsubmit: on_submit,
            h2 { class: "m-0 mb-5 text-lg font-semibold", "Add Doctor" }
            Field { id: "doctorName", label: "Name", value: name }
            Field { id: "specialization", label: "Specialty", value: specialty }
            Field { id: "doctorEmail", label: "Email", value: email, kind: "email" }
            Field { id: "doctorPassword", label: "Password", value: password, kind: "password" }
            Field { id: "doctorPhone", label: "Phone", value: phone }
            fieldset {
                class: "mb-4 availability",
                legend { "Availability" }
                for slot in config.booking.default_slots.iter().cloned() {
                    SlotCheckbox { key: "{slot}", slot: slot.clone(), selected: slots }
                }
            }
            button {
                class: "dashboard-btn",
                r#type: "submit",
                disabled: busy(),
                "Save"
            }
        }
    }
}

#[component]
fn SlotCheckbox(slot: String, selected: Signal<Vec<String>>) -> Element {
    let mut selected = selected;
    let checked = selected.read().contains(&slot);
    let toggled = slot.clone();

    rsx! {
        label {
            class: "slot-option",
            input {
                r#type: "checkbox",
                name: "availability",
                value: "{slot}",
                checked,
                onchange: move |evt: FormEvent| {
                    let mut slots = selected.write();
                    slots.retain(|s| s != &toggled);
                    if evt.checked() {
                        slots.push(toggled.clone());
                    }
                },
            }
            " {slot}"
        }
    }
}

/// Renders whichever modal is open.
#[component]
pub fn ModalHost() -> Element {
    let modals = use_modals();
    let Some(modal) = modals.current() else {
        return rsx! {};
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| modals.close(),
            match modal {
                Modal::AdminLogin => rsx! { LoginForm { kind: LoginKind::Admin } },
                Modal::DoctorLogin => rsx! { LoginForm { kind: LoginKind::Doctor } },
                Modal::PatientLogin => rsx! { LoginForm { kind: LoginKind::Patient } },
                Modal::PatientSignup => rsx! { SignupForm {} },
                Modal::AddDoctor => rsx! { AddDoctorForm {} },
                Modal::Booking(target) => rsx! { BookingOverlay { target: *target } },
                Modal::Prescription(target) => rsx! { PrescriptionForm { target } },
            }
        }
    }
}
