//! The campaign create/edit form.
//!
//! [`CampaignForm`] is the raw state of the inputs; [`CampaignForm::validate`]
//! turns it into a [`store::CampaignDraft`] or the first [`FormError`] found.
//! City selection rules live in [`cities`], the Dioxus component in
//! [`component`].

pub mod cities;
mod component;
mod validation;

pub use component::CampaignEditor;
pub use validation::{CampaignForm, FormError};
