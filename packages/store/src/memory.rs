use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStorage;

/// In-memory SessionStorage for testing and native builds.
///
/// Clones share the same map, so a clone handed to a [`crate::SessionStore`]
/// stays observable from the handle it was cloned from.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> T {
        let mut guard = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.with_entries(|e| e.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        self.with_entries(|e| {
            e.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.with_entries(|e| {
            e.remove(key);
        });
    }
}
