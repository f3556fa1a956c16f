use dioxus::prelude::*;
use ui::{t, use_language, Key, LogoutButton};

use crate::Route;

/// Where the dashboard gate sends accounts whose email is not confirmed yet.
#[component]
pub fn VerifyEmail() -> Element {
    let nav = use_navigator();
    let lang = use_language();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "AdDesk" }
                h2 { "Verify your email" }
                p {
                    "We sent a confirmation link to your email address. "
                    "Open it to activate your account, then sign in again."
                }
                LogoutButton {
                    label: t(lang(), Key::Logout).to_string(),
                    class: "btn btn-outline",
                    on_logout: move |_| {
                        nav.replace(Route::Login {});
                    },
                }
            }
        }
    }
}
