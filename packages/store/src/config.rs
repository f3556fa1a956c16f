//! # Application configuration: `addesk.toml`
//!
//! The web binary embeds an `addesk.toml` at build time and parses it into an
//! [`AppConfig`] on startup. Every section and field has a default, so a
//! missing or empty file is equivalent to the default configuration.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [campaigns]
//! min_budget = 10.0
//! title_min_len = 3
//! title_max_len = 40
//!
//! [ui]
//! default_language = "en"
//! currency = "$"
//! ```

use serde::{Deserialize, Serialize};

use crate::Language;

/// Top-level configuration stored in `addesk.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub campaigns: CampaignRules,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Field limits checked by the campaign form before submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignRules {
    #[serde(default = "default_min_budget")]
    pub min_budget: f64,
    #[serde(default = "default_title_min_len")]
    pub title_min_len: usize,
    #[serde(default = "default_title_max_len")]
    pub title_max_len: usize,
}

fn default_min_budget() -> f64 {
    10.0
}

fn default_title_min_len() -> usize {
    3
}

fn default_title_max_len() -> usize {
    40
}

impl Default for CampaignRules {
    fn default() -> Self {
        Self {
            min_budget: default_min_budget(),
            title_min_len: default_title_min_len(),
            title_max_len: default_title_max_len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Used when no language preference has been stored yet.
    #[serde(default)]
    pub default_language: Language,
    /// Prefix for amounts shown in the wallet, tables and charts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// File name looked up next to the web package.
    pub fn filename() -> &'static str {
        "addesk.toml"
    }

    /// Reads a config from TOML text.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Writes the config back out as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Replace the API base URL when an override is given and non-empty.
    pub fn with_api_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}
