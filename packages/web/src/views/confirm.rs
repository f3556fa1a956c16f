use dioxus::prelude::*;
use ui::{t, use_api, use_language, ErrorText, Key, Spinner, SuccessText};

use crate::Route;

/// Target of the confirmation link sent after registration.
#[component]
pub fn Confirm(token: String) -> Element {
    let api = use_api();
    let lang = use_language();

    let result = use_resource(use_reactive!(|token| {
        let api = api.clone();
        async move {
            let outcome = api.confirm_email(&token).await;
            if let Err(e) = &outcome {
                tracing::warn!("Email confirmation failed: {}", e);
            }
            outcome
        }
    }));

    let body = match &*result.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Ok(message)) => {
            let message = if message.trim().is_empty() {
                "Your email is confirmed. You can sign in now.".to_string()
            } else {
                message.clone()
            };
            rsx! { SuccessText { message } }
        }
        Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "AdDesk" }
                {body}
                div {
                    class: "auth-links",
                    Link { to: Route::Login {}, "{t(lang(), Key::Login)}" }
                }
            }
        }
    }
}
