//! Shared UI for the AdDesk pages. Everything stateful lives in context;
//! the page components in `web` only compose what is exported here.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod auth;
pub use auth::{
    login, logout, register, use_api, use_auth, use_config, use_profile, AuthAction,
    AuthProvider, AuthState, LogoutButton, RequestStatus,
};

mod gate;
pub use gate::{admin_allowed, gate_without_token, redirect_for_profile_error, AdminOnly, GateRedirect, SessionGate};

pub mod campaign_form;
pub use campaign_form::{CampaignEditor, CampaignForm, FormError};

pub mod forms;

pub mod i18n;
pub use i18n::{t, use_language, Key, LanguageProvider, LanguageSelect};

mod prefs;
pub use prefs::make_prefs;

mod browser;
pub use browser::open_external;

pub mod format;

mod navbar;
pub use navbar::Navbar;

mod spinner;
pub use spinner::Spinner;

mod modal;
pub use modal::{ConfirmModal, ModalOverlay};

mod notice;
pub use notice::{ErrorText, SuccessText};

mod status_badge;
pub use status_badge::{status_label, StatusBadge};

pub mod tables;
pub use tables::{CampaignAction, CampaignTable, TransactionTable, UserTable};

pub mod charts;
pub use charts::{BarChart, ChartPoint, StatCard};
