//! Account creation. The backend emails a confirmation link; the user signs
//! in once the address is confirmed.

use dioxus::prelude::*;
use ui::forms::RegistrationForm;
use ui::{
    register, t, use_api, use_auth, use_language, AuthAction, ErrorText, Key, LanguageSelect,
    RequestStatus, SuccessText,
};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let lang = use_language();
    let mut form = use_signal(RegistrationForm::default);
    let mut local_error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let validated = form.read().validate(lang());
            match validated {
                Ok(registration) => {
                    local_error.set(None);
                    if register(auth, api, registration).await {
                        form.set(RegistrationForm::default());
                    }
                }
                Err(message) => {
                    auth.write().apply(AuthAction::ClearMessages);
                    local_error.set(Some(message));
                }
            }
        }
    };

    let state = auth();
    let current = form();
    let message = local_error().or(state.error.clone());
    let done = state.register == RequestStatus::Succeeded;

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div { class: "auth-lang", LanguageSelect {} }
                h1 { "AdDesk" }
                h2 { "{t(lang(), Key::Register)}" }

                if done {
                    SuccessText {
                        message: state
                            .notice
                            .clone()
                            .unwrap_or_else(|| "Check your inbox to confirm your email.".to_string()),
                    }
                } else {
                    form {
                        onsubmit: handle_submit,
                        div {
                            class: "field",
                            label { r#for: "reg-name", "{t(lang(), Key::Name)}" }
                            input {
                                id: "reg-name",
                                value: "{current.name}",
                                oninput: move |evt: FormEvent| form.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "reg-email", "{t(lang(), Key::Email)}" }
                            input {
                                id: "reg-email",
                                r#type: "email",
                                value: "{current.email}",
                                oninput: move |evt: FormEvent| form.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "reg-phone", "{t(lang(), Key::Phone)}" }
                            input {
                                id: "reg-phone",
                                r#type: "tel",
                                value: "{current.phone}",
                                oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "reg-password", "{t(lang(), Key::Password)}" }
                            input {
                                id: "reg-password",
                                r#type: "password",
                                autocomplete: "new-password",
                                value: "{current.password}",
                                oninput: move |evt: FormEvent| form.write().password = evt.value(),
                            }
                        }
                        div {
                            class: "field",
                            label { r#for: "reg-confirm", "{t(lang(), Key::ConfirmPassword)}" }
                            input {
                                id: "reg-confirm",
                                r#type: "password",
                                autocomplete: "new-password",
                                value: "{current.confirm_password}",
                                oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                            }
                        }

                        if let Some(message) = message {
                            ErrorText { message }
                        }

                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "submit",
                            disabled: state.register_pending(),
                            "{t(lang(), Key::Register)}"
                        }
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
