use api::ProfileUpdate;
use dioxus::prelude::*;
use store::Language;
use ui::i18n::set_language;
use ui::{t, use_api, use_language, use_profile, ErrorText, Key, SuccessText};

/// Profile details and interface language.
#[component]
pub fn Settings() -> Element {
    let api = use_api();
    let lang = use_language();
    let mut profile = use_profile();
    let initial = profile.read().clone();

    let mut name = use_signal(|| initial.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut phone = use_signal(|| {
        initial
            .as_ref()
            .and_then(|u| u.phone.clone())
            .unwrap_or_default()
    });
    let mut language = use_signal(|| initial.as_ref().map(|u| u.preferred_language).unwrap_or(lang()));
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            if name().trim().is_empty() {
                status.set(Some(Err("Name is required".to_string())));
                return;
            }
            let update = ProfileUpdate {
                name: name().trim().to_string(),
                phone: phone().trim().to_string(),
                preferred_language: language(),
            };
            saving.set(true);
            match api.update_profile(&update).await {
                Ok(()) => {
                    tracing::info!("Profile updated");
                    set_language(lang, update.preferred_language);
                    if let Ok(user) = api.get_current_user().await {
                        profile.set(Some(user));
                    }
                    status.set(Some(Ok("Settings saved".to_string())));
                }
                Err(e) => {
                    tracing::error!("Failed to update profile: {}", e);
                    status.set(Some(Err(e.to_string())));
                }
            }
            saving.set(false);
        }
    };

    let email = initial.map(|u| u.email).unwrap_or_default();

    rsx! {
        h1 { "{t(lang(), Key::Settings)}" }
        form {
            class: "card",
            onsubmit: handle_save,
            div {
                class: "field",
                label { r#for: "settings-email", "{t(lang(), Key::Email)}" }
                input { id: "settings-email", r#type: "email", value: "{email}", disabled: true }
            }
            div {
                class: "field",
                label { r#for: "settings-name", "{t(lang(), Key::Name)}" }
                input {
                    id: "settings-name",
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            div {
                class: "field",
                label { r#for: "settings-phone", "{t(lang(), Key::Phone)}" }
                input {
                    id: "settings-phone",
                    r#type: "tel",
                    value: "{phone}",
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
            }
            div {
                class: "field",
                label { r#for: "settings-language", "{t(lang(), Key::Language)}" }
                select {
                    id: "settings-language",
                    onchange: move |evt: FormEvent| language.set(Language::from_code(&evt.value())),
                    for choice in Language::ALL {
                        option {
                            key: "{choice.code()}",
                            value: choice.code(),
                            selected: choice == language(),
                            "{choice.native_name()}"
                        }
                    }
                }
            }
            {match status() {
                Some(Ok(message)) => rsx! { SuccessText { message } },
                Some(Err(message)) => rsx! { ErrorText { message } },
                None => rsx! {},
            }}
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: saving(),
                "{t(lang(), Key::Save)}"
            }
        }
    }
}
