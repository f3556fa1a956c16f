//! Session gate for the `/dashboard/*` subtree.
//!
//! - no token: go to the login screen;
//! - profile fetch fails with 400: go to login;
//! - profile fetch fails with 401: go to the email verification screen;
//! - any other failure: go to login.
//!
//! There is no retry and no cached decision: the check runs every time the
//! gate mounts or the token changes.

use api::{ApiError, User};
use dioxus::prelude::*;

use crate::auth::{use_auth, use_profile, AuthAction};
use crate::i18n::{t, use_language, Key};
use crate::Spinner;

/// Where the gate sends a visitor it does not let through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateRedirect {
    Login,
    VerifyEmail,
}

impl GateRedirect {
    /// A trip to the login screen drops the token; an unverified account
    /// keeps it so the verify screen can still sign out cleanly.
    pub fn clears_session(self) -> bool {
        matches!(self, GateRedirect::Login)
    }
}

/// Decision before any request is made.
pub fn gate_without_token(token: Option<&str>) -> Option<GateRedirect> {
    match token {
        Some(t) if !t.is_empty() => None,
        _ => Some(GateRedirect::Login),
    }
}

/// Decision after the profile request failed.
pub fn redirect_for_profile_error(err: &ApiError) -> GateRedirect {
    match err {
        ApiError::Unauthorized(_) => GateRedirect::VerifyEmail,
        ApiError::BadRequest(_) => GateRedirect::Login,
        _ => GateRedirect::Login,
    }
}

/// Renders `children` only once the profile of the token holder loaded.
#[component]
pub fn SessionGate(on_redirect: EventHandler<GateRedirect>, children: Element) -> Element {
    let mut auth = use_auth();
    let mut profile = use_profile();
    let base = use_context::<api::ApiClient>();
    let lang = use_language();
    let mut allowed = use_signal(|| false);

    let _check = use_resource(move || {
        let base = base.clone();
        async move {
            let token = auth.read().token.clone();
            if let Some(redirect) = gate_without_token(token.as_deref()) {
                allowed.set(false);
                on_redirect.call(redirect);
                return;
            }
            match base.with_token(token).get_current_user().await {
                Ok(user) => {
                    profile.set(Some(user));
                    allowed.set(true);
                }
                Err(e) => {
                    tracing::warn!("Profile check failed: {}", e);
                    let redirect = redirect_for_profile_error(&e);
                    allowed.set(false);
                    if redirect.clears_session() {
                        profile.set(None);
                        auth.write().apply(AuthAction::Logout);
                    }
                    on_redirect.call(redirect);
                }
            }
        }
    });

    if !allowed() {
        return rsx! {
            Spinner { label: t(lang(), Key::Loading).to_string() }
        };
    }

    rsx! {
        {children}
    }
}

/// Whether the cached profile belongs to an admin account.
pub fn admin_allowed(profile: Option<&User>) -> bool {
    profile.is_some_and(User::is_admin)
}

/// Renders `children` only for admin accounts. Everyone else gets the
/// "not authorized" notice and a button that calls `on_back`.
#[component]
pub fn AdminOnly(on_back: EventHandler<()>, children: Element) -> Element {
    let profile = use_profile();
    let lang = use_language();

    if !admin_allowed(profile.read().as_ref()) {
        return rsx! {
            div {
                class: "notice notice-error",
                p { "{t(lang(), Key::NotAuthorized)}" }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "{t(lang(), Key::BackToDashboard)}"
                }
            }
        };
    }

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_goes_to_login() {
        assert_eq!(gate_without_token(None), Some(GateRedirect::Login));
        assert_eq!(gate_without_token(Some("")), Some(GateRedirect::Login));
        assert_eq!(gate_without_token(Some("tok")), None);
    }

    #[test]
    fn test_unverified_email_goes_to_verify_screen() {
        let redirect = redirect_for_profile_error(&ApiError::from_response(401, "{}"));
        assert_eq!(redirect, GateRedirect::VerifyEmail);
        assert!(!redirect.clears_session());
    }

    #[test]
    fn test_unknown_user_goes_to_login() {
        let redirect = redirect_for_profile_error(&ApiError::from_response(400, "{}"));
        assert_eq!(redirect, GateRedirect::Login);
        assert!(redirect.clears_session());
    }

    #[test]
    fn test_admin_only_for_admin_accounts() {
        let account = |user_type| User {
            id: "u1".to_string(),
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            phone: None,
            balance: 0.0,
            discount: 0.0,
            preferred_language: Default::default(),
            user_type,
        };
        let admin = account(store::UserType::Admin);
        let member = account(store::UserType::User);
        assert!(admin_allowed(Some(&admin)));
        assert!(!admin_allowed(Some(&member)));
        assert!(!admin_allowed(None));
    }

    #[test]
    fn test_other_failures_go_to_login() {
        for err in [
            ApiError::from_response(403, ""),
            ApiError::from_response(500, ""),
            ApiError::Network("offline".to_string()),
            ApiError::Decode("bad json".to_string()),
            ApiError::MissingToken,
        ] {
            assert_eq!(redirect_for_profile_error(&err), GateRedirect::Login);
        }
    }
}
