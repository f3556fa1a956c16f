use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::prefs::PreferenceStore;

/// In-memory PreferenceStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}
