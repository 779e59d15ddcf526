//! Landing page: pick Admin, Doctor or Patient.

use dioxus::prelude::*;
use store::{Role, SessionStorage, SessionStore};

use crate::icons::{FaHospitalUser, FaUserDoctor, FaUserShield};
use crate::modal::{use_modals, use_register_role_selector, Modal, ModalController};
use crate::nav::{dashboard_url, PATIENT_DASHBOARD};
use crate::session::session_store;
use crate::shell::{BrowserShell, Shell};
use crate::Icon;

/// Act on a role choice.
///
/// Staff roles go straight to their dashboard once logged in as that role
/// and are asked to log in otherwise. Patients can browse anonymously.
pub fn select_role<S: SessionStorage>(
    role: Role,
    store: &SessionStore<S>,
    shell: &impl Shell,
    modals: &impl ModalController,
) {
    let token = store.get_token();
    match role {
        Role::Admin | Role::Doctor => match token {
            Some(token) if store.get_role() == role => shell.navigate(&dashboard_url(role, &token)),
            _ if role == Role::Admin => modals.open(Modal::AdminLogin),
            _ => modals.open(Modal::DoctorLogin),
        },
        Role::LoggedPatient if token.is_some() => {
            shell.navigate(&dashboard_url(Role::LoggedPatient, ""));
        }
        Role::Patient | Role::LoggedPatient => {
            store.set_role(Role::Patient);
            shell.navigate(PATIENT_DASHBOARD);
        }
        Role::None => {}
    }
}

#[component]
pub fn RoleSelectionView() -> Element {
    let modals = use_modals();
    let select = use_callback(move |role: Role| select_role(role, &session_store(), &BrowserShell, &modals));
    use_register_role_selector(select);

    rsx! {
        div {
            class: "role-selection",
            h2 { class: "page-title", "Select Your Role:" }
            button {
                class: "role-btn",
                onclick: move |_| select.call(Role::Admin),
                Icon { icon: FaUserShield, width: 16, height: 16 }
                " Admin"
            }
            button {
                class: "role-btn",
                onclick: move |_| select.call(Role::Doctor),
                Icon { icon: FaUserDoctor, width: 16, height: 16 }
                " Doctor"
            }
            button {
                class: "role-btn",
                onclick: move |_| select.call(Role::Patient),
                Icon { icon: FaHospitalUser, width: 16, height: 16 }
                " Patient"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingModals, RecordingShell};
    use store::MemoryStorage;

    #[test]
    fn test_staff_roles_open_login() {
        let store = SessionStore::new(MemoryStorage::new());
        let shell = RecordingShell::default();
        let modals = RecordingModals::default();

        select_role(Role::Admin, &store, &shell, &modals);
        select_role(Role::Doctor, &store, &shell, &modals);
        assert_eq!(modals.opened(), vec![Modal::AdminLogin, Modal::DoctorLogin]);
        assert!(shell.navigations().is_empty());
    }

    #[test]
    fn test_logged_in_staff_goes_to_dashboard() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session(Role::Doctor, "doc-tok");
        let shell = RecordingShell::default();
        let modals = RecordingModals::default();

        select_role(Role::Doctor, &store, &shell, &modals);
        assert_eq!(shell.navigations(), vec!["/doctorDashboard/doc-tok".to_string()]);

        // A leftover token from another role is not enough.
        select_role(Role::Admin, &store, &shell, &modals);
        assert_eq!(modals.opened(), vec![Modal::AdminLogin]);
    }

    #[test]
    fn test_patient_browses_anonymously() {
        let store = SessionStore::new(MemoryStorage::new());
        let shell = RecordingShell::default();
        let modals = RecordingModals::default();

        select_role(Role::Patient, &store, &shell, &modals);
        assert_eq!(store.get_role(), Role::Patient);
        assert_eq!(store.get_token(), None);
        assert_eq!(shell.navigations(), vec![PATIENT_DASHBOARD.to_string()]);
    }
}
