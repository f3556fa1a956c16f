pub mod config;
pub mod language;
pub mod models;
pub mod prefs;

mod memory;
pub use memory::MemoryPrefs;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStoragePrefs;

pub use config::AppConfig;
pub use language::Language;
pub use models::{
    Campaign, CampaignDraft, CampaignStatus, DailyAnalytics, PaymentMethod, TargetGender,
    Transaction, User, UserStats, UserType,
};
pub use prefs::{PreferenceStore, Preferences};
