//! # Browser preferences
//!
//! Small string key/value settings that must survive a page reload. The only
//! persisted setting is the interface language, stored under
//! [`PREFERRED_LANGUAGE_KEY`] so it stays compatible with values written by
//! earlier builds of the app.
//!
//! [`PreferenceStore`] is the storage seam: [`crate::MemoryPrefs`] for tests
//! and native builds, `LocalStoragePrefs` (wasm + `web` feature) for the
//! browser. [`Preferences`] layers typed accessors on top of either.

use crate::Language;

pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Synchronous string storage, shaped like the Web Storage API.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed access to the settings kept in a [`PreferenceStore`].
#[derive(Clone, Debug)]
pub struct Preferences<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored language, if the user ever picked one.
    pub fn language(&self) -> Option<Language> {
        self.store
            .get(PREFERRED_LANGUAGE_KEY)
            .filter(|code| !code.trim().is_empty())
            .map(|code| Language::from_code(&code))
    }

    /// Stored language or the given fallback.
    pub fn language_or(&self, fallback: Language) -> Language {
        self.language().unwrap_or(fallback)
    }

    pub fn set_language(&self, lang: Language) {
        self.store.set(PREFERRED_LANGUAGE_KEY, lang.code());
    }

    pub fn clear_language(&self) {
        self.store.remove(PREFERRED_LANGUAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryPrefs;

    #[test]
    fn test_language_preference() {
        let prefs = Preferences::new(MemoryPrefs::new());
        assert_eq!(prefs.language(), None);
        assert_eq!(prefs.language_or(Language::French), Language::French);

        prefs.set_language(Language::Arabic);
        assert_eq!(prefs.language(), Some(Language::Arabic));

        prefs.clear_language();
        assert_eq!(prefs.language(), None);
    }

    #[test]
    fn test_stored_under_legacy_key() {
        let store = MemoryPrefs::new();
        let prefs = Preferences::new(store.clone());
        prefs.set_language(Language::French);
        assert_eq!(store.get("preferredLanguage").as_deref(), Some("fr"));

        store.set("preferredLanguage", "xx");
        assert_eq!(prefs.language(), Some(Language::English));

        store.set("preferredLanguage", "");
        assert_eq!(prefs.language(), None);
    }
}
