//! Shared preferences constructor for all platforms.
//!
//! Returns [`store::Preferences`] backed by the appropriate
//! [`store::PreferenceStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage`
//! - **Native**: an in-memory store, so nothing outlives the process

pub fn make_prefs() -> store::Preferences<impl store::PreferenceStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Preferences::new(store::LocalStoragePrefs::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::Preferences::new(store::MemoryPrefs::new())
    }
}
