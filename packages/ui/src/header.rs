//! Role-driven page header.
//!
//! The header is a pure function of the path and the stored session:
//!
//! | State | Actions |
//! |-------|---------|
//! | site root | none (logo only), stored role dropped |
//! | `admin` | Add Doctor, Logout |
//! | `doctor` | Home, Logout |
//! | `patient` | Login, Sign Up |
//! | `loggedPatient` | Home, Appointments, Logout (patient-scoped) |
//! | no role | Role Selection |
//!
//! An invalid session renders nothing: the user has already been notified
//! and sent back to the root.

use dioxus::prelude::*;
use store::{Role, SessionCheck, SessionStorage, SessionStore};

use crate::icons::{
    FaCalendarCheck, FaHospital, FaHouse, FaRightFromBracket, FaRightToBracket, FaUserPlus,
    FaUsers,
};
use crate::modal::{use_modals, Modal, ModalController};
use crate::nav::{
    dashboard_url, is_root_path, LOGGED_PATIENT_HOME, PATIENT_APPOINTMENTS, PATIENT_DASHBOARD,
    ROOT, SESSION_EXPIRED_MESSAGE,
};
use crate::session::{enforce_session, session_store};
use crate::shell::{BrowserShell, Shell};
use crate::Icon;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderState {
    /// Logo only.
    Minimal,
    /// The session failed its check; nothing role-specific may render.
    Invalid,
    Nav(HeaderNav),
}

/// Navigation branch, one per role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderNav {
    Admin,
    Doctor,
    Patient,
    LoggedPatient,
    RoleSelection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    AddDoctor,
    DoctorHome,
    Login,
    SignUp,
    Home,
    Appointments,
    Logout,
    LogoutPatient,
    RoleSelection,
}

impl HeaderNav {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => HeaderNav::Admin,
            Role::Doctor => HeaderNav::Doctor,
            Role::Patient => HeaderNav::Patient,
            Role::LoggedPatient => HeaderNav::LoggedPatient,
            Role::None => HeaderNav::RoleSelection,
        }
    }

    pub fn actions(&self) -> Vec<HeaderAction> {
        match self {
            HeaderNav::Admin => vec![HeaderAction::AddDoctor, HeaderAction::Logout],
            HeaderNav::Doctor => vec![HeaderAction::DoctorHome, HeaderAction::Logout],
            HeaderNav::Patient => vec![HeaderAction::Login, HeaderAction::SignUp],
            HeaderNav::LoggedPatient => vec![
                HeaderAction::Home,
                HeaderAction::Appointments,
                HeaderAction::LogoutPatient,
            ],
            HeaderNav::RoleSelection => vec![HeaderAction::RoleSelection],
        }
    }
}

impl HeaderAction {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderAction::AddDoctor => "Add Doctor",
            HeaderAction::DoctorHome | HeaderAction::Home => "Home",
            HeaderAction::Login => "Login",
            HeaderAction::SignUp => "Sign Up",
            HeaderAction::Appointments => "Appointments",
            HeaderAction::Logout | HeaderAction::LogoutPatient => "Logout",
            HeaderAction::RoleSelection => "Role Selection",
        }
    }

    pub fn is_logout(&self) -> bool {
        matches!(self, HeaderAction::Logout | HeaderAction::LogoutPatient)
    }
}

/// Decide what the header shows for `path`, running the session check first.
pub fn resolve_header<S: SessionStorage>(path: &str, store: &SessionStore<S>, shell: &impl Shell) -> HeaderState {
    match enforce_session(path, store, shell) {
        SessionCheck::Invalid => HeaderState::Invalid,
        SessionCheck::Valid(_) if is_root_path(path) => HeaderState::Minimal,
        SessionCheck::Valid(session) => HeaderState::Nav(HeaderNav::for_role(session.role)),
    }
}

/// End the session and return to the role selection page.
pub fn logout<S: SessionStorage>(store: &SessionStore<S>, shell: &impl Shell) {
    store.clear();
    tracing::info!("logged out");
    shell.navigate(ROOT);
}

/// Drop the patient role and return to the anonymous patient dashboard.
pub fn logout_patient<S: SessionStorage>(store: &SessionStore<S>, shell: &impl Shell) {
    store.clear_role();
    tracing::info!("patient logged out");
    shell.navigate(PATIENT_DASHBOARD);
}

pub fn run_header_action<S: SessionStorage>(
    action: HeaderAction,
    store: &SessionStore<S>,
    shell: &impl Shell,
    modals: &impl ModalController,
) {
    match action {
        HeaderAction::AddDoctor => modals.open(Modal::AddDoctor),
        HeaderAction::DoctorHome => match store.get_token() {
            Some(token) => shell.navigate(&dashboard_url(Role::Doctor, &token)),
            None => {
                store.clear();
                shell.alert(SESSION_EXPIRED_MESSAGE);
                shell.navigate(ROOT);
            }
        },
        HeaderAction::Login => modals.open(Modal::PatientLogin),
        HeaderAction::SignUp => modals.open(Modal::PatientSignup),
        HeaderAction::Home => shell.navigate(LOGGED_PATIENT_HOME),
        HeaderAction::Appointments => shell.navigate(PATIENT_APPOINTMENTS),
        HeaderAction::Logout => logout(store, shell),
        HeaderAction::LogoutPatient => logout_patient(store, shell),
        HeaderAction::RoleSelection => shell.navigate(ROOT),
    }
}

#[component]
fn Logo() -> Element {
    rsx! {
        div {
            class: "logo-section",
            Icon { icon: FaHospital, width: 28, height: 28 }
            span { class: "logo-title", "Hospital CMS" }
        }
    }
}

#[component]
fn ActionIcon(action: HeaderAction) -> Element {
    match action {
        HeaderAction::AddDoctor | HeaderAction::SignUp => rsx! { Icon { icon: FaUserPlus, width: 14, height: 14 } },
        HeaderAction::DoctorHome | HeaderAction::Home => rsx! { Icon { icon: FaHouse, width: 14, height: 14 } },
        HeaderAction::Login => rsx! { Icon { icon: FaRightToBracket, width: 14, height: 14 } },
        HeaderAction::Appointments => rsx! { Icon { icon: FaCalendarCheck, width: 14, height: 14 } },
        HeaderAction::Logout | HeaderAction::LogoutPatient => {
            rsx! { Icon { icon: FaRightFromBracket, width: 14, height: 14 } }
        }
        HeaderAction::RoleSelection => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
    }
}

/// Page header for `path`. Resolved once per mount.
#[component]
pub fn Header(path: String) -> Element {
    let modals = use_modals();
    let state = use_hook(move || resolve_header(&path, &session_store(), &BrowserShell));

    let nav = match state {
        HeaderState::Invalid => return rsx! {},
        HeaderState::Minimal => {
            return rsx! {
                header { class: "header", Logo {} }
            }
        }
        HeaderState::Nav(nav) => nav,
    };

    rsx! {
        header {
            class: "header",
            Logo {}
            nav {
                class: "nav-actions",
                for action in nav.actions() {
                    if action.is_logout() {
                        a {
                            key: "{action:?}",
                            class: "nav-link",
                            href: "#",
                            onclick: move |evt: Event<MouseData>| {
                                evt.prevent_default();
                                run_header_action(action, &session_store(), &BrowserShell, &modals);
                            },
                            ActionIcon { action }
                            "{action.label()}"
                        }
                    } else {
                        button {
                            key: "{action:?}",
                            class: "adminBtn",
                            onclick: move |_| run_header_action(action, &session_store(), &BrowserShell, &modals),
                            ActionIcon { action }
                            "{action.label()}"
                        }
                    }
                }
            }
        }
    }
}
