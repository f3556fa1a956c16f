use dioxus::prelude::*;
use ui::{t, use_api, use_language, ErrorText, Key, SuccessText};

use crate::Route;

/// Ask for a password reset link by email.
#[component]
pub fn ResetPassword() -> Element {
    let api = use_api();
    let lang = use_language();
    let mut email = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut outcome = use_signal(|| Option::<Result<String, String>>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let address = email().trim().to_string();
            if !address.contains('@') {
                outcome.set(Some(Err("Please enter a valid email".to_string())));
                return;
            }
            sending.set(true);
            let result = match api.request_password_reset(&address).await {
                Ok(message) if message.trim().is_empty() => {
                    Ok("If the address is registered, a reset link is on its way.".to_string())
                }
                Ok(message) => Ok(message),
                Err(e) => {
                    tracing::warn!("Password reset request failed: {}", e);
                    Err(e.to_string())
                }
            };
            outcome.set(Some(result));
            sending.set(false);
        }
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "AdDesk" }
                h2 { "{t(lang(), Key::ForgotPassword)}" }
                form {
                    onsubmit: handle_submit,
                    div {
                        class: "field",
                        label { r#for: "reset-email", "{t(lang(), Key::Email)}" }
                        input {
                            id: "reset-email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    {match outcome() {
                        Some(Ok(message)) => rsx! { SuccessText { message } },
                        Some(Err(message)) => rsx! { ErrorText { message } },
                        None => rsx! {},
                    }}
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: sending(),
                        "{t(lang(), Key::Save)}"
                    }
                }
                div {
                    class: "auth-links",
                    Link { to: Route::Login {}, "{t(lang(), Key::Login)}" }
                }
            }
        }
    }
}
