//! # `localStorage` preference store: browser-side persistence
//!
//! [`LocalStoragePrefs`] is the [`PreferenceStore`] used on the web platform.
//! It is a zero-size handle that looks up `window.localStorage` on every call,
//! so it is freely `Clone` and never holds a JS object across awaits.
//!
//! All methods swallow errors: private browsing modes and disabled storage
//! degrade to "nothing stored" instead of breaking the UI.

use crate::prefs::PreferenceStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePrefs;

impl LocalStoragePrefs {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStoragePrefs {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
