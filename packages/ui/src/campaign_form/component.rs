use api::guess_image_mime;
use dioxus::prelude::*;
use store::{Campaign, CampaignDraft, TargetGender};

use super::cities::{cities_enabled, city_options, country_options};
use super::CampaignForm;
use crate::auth::{use_api, use_config};
use crate::i18n::{t, use_language, Key};
use crate::notice::ErrorText;

/// Create/edit form for a campaign.
///
/// Validates locally and only hands a [`CampaignDraft`] to `on_submit` when
/// every rule passes. The photo is uploaded as soon as it is picked.
#[component]
pub fn CampaignEditor(
    initial: Option<Campaign>,
    submit_label: String,
    on_submit: EventHandler<CampaignDraft>,
    on_cancel: EventHandler<()>,
    #[props(default)] busy: bool,
    #[props(default)] server_error: Option<String>,
) -> Element {
    let api = use_api();
    let config = use_config();
    let lang = use_language();

    let mut form = use_signal(move || {
        initial
            .as_ref()
            .map(CampaignForm::from_campaign)
            .unwrap_or_default()
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);

    let countries_api = api.clone();
    let countries = use_resource(move || {
        let api = countries_api.clone();
        async move {
            api.get_countries().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to load countries: {}", e);
                Vec::new()
            })
        }
    });

    let cities_api = api.clone();
    let cities = use_resource(move || {
        let api = cities_api.clone();
        let country = form.read().country.clone();
        async move {
            if !cities_enabled(&country) {
                return Vec::new();
            }
            api.get_cities(country.trim()).await.unwrap_or_else(|e| {
                tracing::warn!("Failed to load cities for {}: {}", country, e);
                Vec::new()
            })
        }
    });

    let fetched_countries = countries.read().clone().unwrap_or_default();
    let fetched_cities = cities.read().clone().unwrap_or_default();
    let country_choices = country_options(&fetched_countries);
    let city_choices = city_options(&fetched_cities);
    let show_cities = cities_enabled(&form.read().country);

    let rules = config.campaigns.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let known = countries.read().clone().unwrap_or_default();
        let validated = form.read().validate(&rules, &known);
        match validated {
            Ok(draft) => {
                error.set(None);
                on_submit.call(draft);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let upload_api = api.clone();
    let handle_photo = move |evt: FormEvent| {
        let api = upload_api.clone();
        async move {
            let Some(engine) = evt.files() else {
                return;
            };
            let Some(name) = engine.files().into_iter().next() else {
                return;
            };
            let Some(bytes) = engine.read_file(&name).await else {
                error.set(Some(format!("Could not read {name}")));
                return;
            };
            uploading.set(true);
            match api.upload_photo(&name, bytes, guess_image_mime(&name)).await {
                Ok(path) => {
                    tracing::info!("Uploaded campaign photo {}", path);
                    form.write().photo_path = path;
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!("Photo upload failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            uploading.set(false);
        }
    };

    let current = form.read().clone();
    let message = error().or(server_error);

    rsx! {
        form {
            class: "campaign-form",
            onsubmit: handle_submit,

            div {
                class: "field",
                label { r#for: "campaign-title", "{t(lang(), Key::Title)}" }
                input {
                    id: "campaign-title",
                    r#type: "text",
                    value: "{current.title}",
                    maxlength: "{config.campaigns.title_max_len}",
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
            }

            div {
                class: "field-row",
                div {
                    class: "field",
                    label { r#for: "campaign-start", "{t(lang(), Key::StartDate)}" }
                    input {
                        id: "campaign-start",
                        r#type: "date",
                        value: "{current.start_date}",
                        oninput: move |evt: FormEvent| form.write().start_date = evt.value(),
                    }
                }
                div {
                    class: "field",
                    label { r#for: "campaign-end", "{t(lang(), Key::EndDate)}" }
                    input {
                        id: "campaign-end",
                        r#type: "date",
                        value: "{current.end_date}",
                        oninput: move |evt: FormEvent| form.write().end_date = evt.value(),
                    }
                }
            }

            div {
                class: "field",
                label { r#for: "campaign-budget", "{t(lang(), Key::Budget)} ({config.ui.currency})" }
                input {
                    id: "campaign-budget",
                    r#type: "number",
                    min: "{config.campaigns.min_budget}",
                    step: "0.01",
                    value: "{current.budget}",
                    oninput: move |evt: FormEvent| form.write().budget = evt.value(),
                }
            }

            div {
                class: "field",
                label { r#for: "campaign-country", "{t(lang(), Key::Country)}" }
                select {
                    id: "campaign-country",
                    value: "{current.country}",
                    onchange: move |evt: FormEvent| form.write().set_country(evt.value()),
                    option { value: "", disabled: true, selected: current.country.is_empty(), "-" }
                    for country in country_choices {
                        option {
                            key: "{country}",
                            value: "{country}",
                            selected: country == current.country,
                            "{country}"
                        }
                    }
                }
            }

            if show_cities {
                fieldset {
                    class: "field city-picker",
                    legend { "{t(lang(), Key::Cities)}" }
                    for city in city_choices {
                        label {
                            key: "{city}",
                            class: "city-option",
                            input {
                                r#type: "checkbox",
                                checked: current.targeted_cities.contains(&city),
                                onchange: {
                                    let city = city.clone();
                                    move |_| form.write().toggle_city(&city)
                                },
                            }
                            if city == store::models::ALL_CITIES {
                                "All cities"
                            } else {
                                "{city}"
                            }
                        }
                    }
                }
            }

            div {
                class: "field",
                label { r#for: "campaign-gender", "{t(lang(), Key::Gender)}" }
                select {
                    id: "campaign-gender",
                    onchange: move |evt: FormEvent| {
                        form.write().gender = TargetGender::from_str_lossy(&evt.value())
                    },
                    for gender in TargetGender::ALL {
                        option {
                            key: "{gender.as_str()}",
                            value: gender.as_str(),
                            selected: gender == current.gender,
                            "{gender.as_str()}"
                        }
                    }
                }
            }

            div {
                class: "field",
                label { r#for: "campaign-photo", "{t(lang(), Key::Photo)}" }
                input {
                    id: "campaign-photo",
                    r#type: "file",
                    accept: "image/*",
                    disabled: uploading(),
                    onchange: handle_photo,
                }
                if uploading() {
                    span { class: "hint", "{t(lang(), Key::Loading)}" }
                } else if !current.photo_path.is_empty() {
                    span { class: "hint", "{current.photo_path}" }
                }
            }

            div {
                class: "field",
                label { r#for: "campaign-link", "{t(lang(), Key::Link)}" }
                input {
                    id: "campaign-link",
                    r#type: "url",
                    placeholder: "https://",
                    value: "{current.link}",
                    oninput: move |evt: FormEvent| form.write().link = evt.value(),
                }
            }

            if let Some(message) = message {
                ErrorText { message }
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy || uploading(),
                    "{submit_label}"
                }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "{t(lang(), Key::Cancel)}"
                }
            }
        }
    }
}
