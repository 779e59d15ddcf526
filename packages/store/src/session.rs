//! # Session store — persisted role and token
//!
//! [`SessionStore`] is the single source of truth for "who is using the UI right
//! now". It wraps two key-value entries in a [`SessionStorage`] backend:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`ROLE_KEY`] (`"userRole"`) | [`Role::as_str`] |
//! | [`TOKEN_KEY`] (`"token"`) | opaque credential |
//!
//! Backends are synchronous (browser `localStorage` is), so a multi-key update
//! completes before any other task on the event loop can observe it. Writes are
//! ordered so that no intermediate state is an authenticated role without a
//! token: `set_session` writes the token before the role, `clear` removes the
//! role before the token.
//!
//! Views never cache a [`Session`]. Each entry point calls [`SessionStore::check`],
//! which enforces the invariant "authenticated role ⇒ token present" and clears
//! the session when it does not hold.

use crate::role::Role;

/// Storage key for the persisted role.
pub const ROLE_KEY: &str = "userRole";
/// Storage key for the persisted token.
pub const TOKEN_KEY: &str = "token";

/// Synchronous string key-value storage that survives page loads.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// A snapshot of the persisted session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub token: Option<String>,
}

/// Result of the invariant check run at every view entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCheck {
    Valid(Session),
    /// An authenticated role was stored without a token. The session has
    /// already been cleared when this is returned.
    Invalid,
}

/// Role/token accessor over a [`SessionStorage`] backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn get_role(&self) -> Role {
        self.storage
            .get(ROLE_KEY)
            .map(|r| Role::parse(&r))
            .unwrap_or_default()
    }

    /// The stored token. Empty strings count as absent.
    pub fn get_token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
    }

    /// Raw snapshot, without the invariant check.
    pub fn session(&self) -> Session {
        Session {
            role: self.get_role(),
            token: self.get_token(),
        }
    }

    /// Persist an authenticated session.
    pub fn set_session(&self, role: Role, token: &str) {
        self.storage.set(TOKEN_KEY, token);
        self.storage.set(ROLE_KEY, role.as_str());
        tracing::info!("session started as {role}");
    }

    /// Store a role that needs no credential (e.g. the anonymous patient).
    /// Any stored token is left untouched.
    pub fn set_role(&self, role: Role) {
        match role {
            Role::None => self.storage.remove(ROLE_KEY),
            _ => self.storage.set(ROLE_KEY, role.as_str()),
        }
    }

    /// Remove the role only, keeping any token.
    pub fn clear_role(&self) {
        self.storage.remove(ROLE_KEY);
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.storage.remove(ROLE_KEY);
        self.storage.remove(TOKEN_KEY);
    }

    /// Enforce "authenticated role ⇒ token present".
    ///
    /// On violation the session is cleared and [`SessionCheck::Invalid`] is
    /// returned; the caller must notify the user and navigate to the
    /// anonymous entry view before rendering anything role-specific.
    pub fn check(&self) -> SessionCheck {
        let session = self.session();
        if session.role.is_authenticated() && session.token.is_none() {
            tracing::warn!("role {} stored without a token, clearing session", session.role);
            self.clear();
            return SessionCheck::Invalid;
        }
        SessionCheck::Valid(session)
    }
}
