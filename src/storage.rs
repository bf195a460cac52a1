//! Key/value persistence for user preferences.

use std::cell::RefCell;
use std::collections::HashMap;

/// Where preferences live between visits.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`; reads and writes degrade to no-ops when storage
/// is disabled (private mode, sandboxed iframes).
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(storage)) = win.local_storage() {
                if let Err(e) = storage.set_item(key, value) {
                    crate::warn_log!("Failed to persist {}: {:?}", key, e);
                }
            }
        }
    }
}

/// In-memory store for tests and for pages without storage access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
