//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`SessionStorage`] implementation used on the **web
//! platform**. Entries live in `window.localStorage`, so the session survives
//! navigation and full page loads.
//!
//! The handle is a zero-size struct that looks up `window.localStorage` on
//! every call. All errors (storage disabled, quota exceeded, no window) are
//! logged and swallowed: reads degrade to "absent", which the session check
//! then treats as an anonymous visitor.

use crate::session::SessionStorage;

/// `window.localStorage`-backed SessionStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::error!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::error!("failed to write {key} to localStorage: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::error!("failed to remove {key} from localStorage: {e:?}");
        }
    }
}
