//! Second half of the reset flow: the emailed link carries a token, which is
//! checked before the form is shown.

use dioxus::prelude::*;
use ui::forms::check_new_password;
use ui::{t, use_api, use_language, ErrorText, Key, Spinner, SuccessText};

use crate::Route;

#[component]
pub fn NewPassword(token: String) -> Element {
    let api = use_api();
    let lang = use_language();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut done = use_signal(|| Option::<String>::None);

    let submit_token = token.clone();
    let verify_api = api.clone();
    let verified = use_resource(use_reactive!(|token| {
        let api = verify_api.clone();
        async move {
            api.verify_reset_token(&token).await.map_err(|e| {
                tracing::warn!("Reset token rejected: {}", e);
                e
            })
        }
    }));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let token = submit_token.clone();
        async move {
            if let Err(message) = check_new_password(&password(), &confirm()) {
                error.set(Some(message));
                return;
            }
            saving.set(true);
            match api.set_new_password(&token, &password()).await {
                Ok(message) => {
                    error.set(None);
                    done.set(Some(if message.trim().is_empty() {
                        "Your password has been updated.".to_string()
                    } else {
                        message
                    }));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        }
    };

    let body = match &*verified.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(_)) => rsx! {
            ErrorText { message: "This reset link is invalid or has expired.".to_string() }
        },
        Some(Ok(())) => match done() {
            Some(message) => rsx! { SuccessText { message } },
            None => rsx! {
                form {
                    onsubmit: handle_submit,
                    div {
                        class: "field",
                        label { r#for: "new-password", "{t(lang(), Key::Password)}" }
                        input {
                            id: "new-password",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "new-password-confirm", "{t(lang(), Key::ConfirmPassword)}" }
                        input {
                            id: "new-password-confirm",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: "{confirm}",
                            oninput: move |evt: FormEvent| confirm.set(evt.value()),
                        }
                    }
                    if let Some(message) = error() {
                        ErrorText { message }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: saving(),
                        "{t(lang(), Key::Save)}"
                    }
                }
            },
        },
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
