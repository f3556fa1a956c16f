//! Login page: email and password against `/auth/login`.

use dioxus::prelude::*;
use ui::{login, t, use_api, use_auth, use_language, ErrorText, Key, LanguageSelect, SuccessText};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let lang = use_language();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            if login(auth, api, email(), password()).await {
                nav.push(Route::Dashboard {});
            }
        }
    };

    let state = auth();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div { class: "auth-lang", LanguageSelect {} }
                h1 { "AdDesk" }
                h2 { "{t(lang(), Key::Login)}" }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "field",
                        label { r#for: "login-email", "{t(lang(), Key::Email)}" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "login-password", "{t(lang(), Key::Password)}" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    if let Some(message) = state.error.clone() {
                        ErrorText { message }
                    }
                    if let Some(message) = state.notice.clone() {
                        SuccessText { message }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: state.login_pending(),
                        "{t(lang(), Key::Login)}"
                    }
                }

                div {
                    class: "auth-links",
                    Link { to: Route::ResetPassword {}, "{t(lang(), Key::ForgotPassword)}" }
                    Link { to: Route::Register {}, "{t(lang(), Key::Register)}" }
                }
            }
        }
    }
}
