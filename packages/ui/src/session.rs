//! Platform session store and the page-entry session check.
//!
//! [`session_store`] returns a [`SessionStore`] over the platform backend:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: a process-wide [`store::MemoryStorage`]
//!
//! Views call it at the moment of interaction instead of holding on to a
//! session, so every action sees the current role and token.

use dioxus::prelude::*;
use store::{SessionCheck, SessionStorage, SessionStore};

use crate::nav::{is_root_path, ROOT, SESSION_EXPIRED_MESSAGE};
use crate::shell::{BrowserShell, Shell};

/// Create a platform-appropriate session store.
pub fn session_store() -> SessionStore<impl SessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static STORAGE: OnceLock<store::MemoryStorage> = OnceLock::new();
        SessionStore::new(STORAGE.get_or_init(store::MemoryStorage::new).clone())
    }
}

/// Run the session invariant check for a page entry.
///
/// The site root is a reset state: any stored role is dropped and the check
/// trivially passes. Elsewhere an authenticated role without a token clears
/// the session, shows a blocking notice and sends the user to the root.
pub fn enforce_session<S: SessionStorage>(path: &str, store: &SessionStore<S>, shell: &impl Shell) -> SessionCheck {
    if is_root_path(path) {
        store.clear_role();
    }
    let check = store.check();
    if check == SessionCheck::Invalid {
        shell.alert(SESSION_EXPIRED_MESSAGE);
        shell.navigate(ROOT);
    }
    check
}

/// Whether `token`, as carried in a dashboard URL, is the stored one.
/// Requests always use the stored token.
pub fn is_stored_token<S: SessionStorage>(store: &SessionStore<S>, token: &str) -> bool {
    store.get_token().as_deref() == Some(token)
}

/// Renders `children` only if the session is valid on entry to `path`.
///
/// The check runs once per mount, before any child renders, so privileged
/// markup never flashes for an invalid session.
#[component]
pub fn SessionGate(path: String, children: Element) -> Element {
    let check = use_hook(move || enforce_session(&path, &session_store(), &BrowserShell));

    match check {
        SessionCheck::Valid(_) => rsx! { {children} },
        SessionCheck::Invalid => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingShell;
    use store::{MemoryStorage, Role, Session, ROLE_KEY};

    #[test]
    fn test_valid_session_passes_silently() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session(Role::Doctor, "tok");
        let shell = RecordingShell::default();

        let check = enforce_session("/doctorDashboard/tok", &store, &shell);
        assert!(matches!(check, SessionCheck::Valid(Session { role: Role::Doctor, .. })));
        assert!(shell.alerts().is_empty());
        assert!(shell.navigations().is_empty());
    }

    #[test]
    fn test_path_token_compared_with_stored_token() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!is_stored_token(&store, "tok"));
        store.set_session(Role::Admin, "tok");
        assert!(is_stored_token(&store, "tok"));
        assert!(!is_stored_token(&store, "old-tok"));
    }

    #[test]
    fn test_missing_token_forces_logout_and_redirect() {
        for role in [Role::LoggedPatient, Role::Doctor, Role::Admin] {
            let storage = MemoryStorage::new();
            storage.set(ROLE_KEY, role.as_str());
            let store = SessionStore::new(storage);
            let shell = RecordingShell::default();

            assert_eq!(enforce_session("/patient/home", &store, &shell), SessionCheck::Invalid);
            assert_eq!(store.get_role(), Role::None);
            assert_eq!(shell.alerts(), vec![SESSION_EXPIRED_MESSAGE.to_string()]);
            assert_eq!(shell.navigations(), vec![ROOT.to_string()]);
        }
    }

    #[test]
    fn test_root_resets_role() {
        let storage = MemoryStorage::new();
        storage.set(ROLE_KEY, "admin");
        let store = SessionStore::new(storage);
        let shell = RecordingShell::default();

        let check = enforce_session("/", &store, &shell);
        assert_eq!(check, SessionCheck::Valid(Session::default()));
        assert!(shell.alerts().is_empty());
    }
}
