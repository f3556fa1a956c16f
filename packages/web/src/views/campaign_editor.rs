use dioxus::prelude::*;
use store::CampaignDraft;
use ui::{t, use_api, use_language, CampaignEditor, ErrorText, Key, Spinner};

use crate::Route;

#[component]
pub fn NewCampaign() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let lang = use_language();
    let mut saving = use_signal(|| false);
    let mut server_error = use_signal(|| Option::<String>::None);

    let on_submit = move |draft: CampaignDraft| {
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.create_campaign(&draft).await {
                Ok(()) => {
                    tracing::info!("Created campaign {}", draft.title);
                    nav.push(Route::Campaigns {});
                }
                Err(e) => {
                    tracing::error!("Failed to create campaign: {}", e);
                    server_error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        h1 { "{t(lang(), Key::NewCampaign)}" }
        CampaignEditor {
            initial: None,
            submit_label: t(lang(), Key::Save).to_string(),
            on_submit,
            on_cancel: move |_| {
                nav.push(Route::Campaigns {});
            },
            busy: saving(),
            server_error: server_error(),
        }
    }
}

/// Loads the campaign, then reuses the create form prefilled.
#[component]
pub fn EditCampaign(id: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let lang = use_language();
    let mut saving = use_signal(|| false);
    let mut server_error = use_signal(|| Option::<String>::None);

    let submit_id = id.clone();
    let load_api = api.clone();
    let campaign = use_resource(use_reactive!(|id| {
        let api = load_api.clone();
        async move { api.get_campaign(&id).await }
    }));

    let on_submit = move |draft: CampaignDraft| {
        let api = api.clone();
        let id = submit_id.clone();
        spawn(async move {
            saving.set(true);
            match api.update_campaign(&id, &draft).await {
                Ok(()) => {
                    tracing::info!("Updated campaign {}", id);
                    nav.push(Route::Campaigns {});
                }
                Err(e) => {
                    tracing::error!("Failed to update campaign {}: {}", id, e);
                    server_error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let body = match &*campaign.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
        Some(Ok(current)) if !current.status.can_edit() => rsx! {
            ErrorText { message: format!("A campaign that is {} cannot be edited.", current.status) }
        },
        Some(Ok(current)) => rsx! {
            CampaignEditor {
                key: "{current.id}",
                initial: Some(current.clone()),
                submit_label: t(lang(), Key::Save).to_string(),
                on_submit,
                on_cancel: move |_| {
                    nav.push(Route::Campaigns {});
                },
                busy: saving(),
                server_error: server_error(),
            }
        },
    };

    rsx! {
        h1 { "{t(lang(), Key::Edit)}" }
        {body}
    }
}
