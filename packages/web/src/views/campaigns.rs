use dioxus::prelude::*;
use store::models::StatusUpdate;
use store::{Campaign, CampaignStatus};
use ui::{
    t, use_api, use_language, CampaignAction, CampaignTable, ConfirmModal, ErrorText, Key, Spinner,
};

use crate::Route;

/// The signed-in user's campaigns with the row actions their status allows.
#[component]
pub fn Campaigns() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let lang = use_language();
    let mut pending_delete = use_signal(|| Option::<Campaign>::None);
    let mut busy = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);

    let list_api = api.clone();
    let mut campaigns = use_resource(move || {
        let api = list_api.clone();
        async move { api.get_campaigns().await }
    });

    let status_api = api.clone();
    let on_action = move |(action, campaign): (CampaignAction, Campaign)| {
        let status = match action {
            CampaignAction::Open | CampaignAction::Edit => {
                nav.push(Route::EditCampaign { id: campaign.id });
                return;
            }
            CampaignAction::Delete => {
                pending_delete.set(Some(campaign));
                return;
            }
            CampaignAction::Stop => CampaignStatus::Stopped,
            CampaignAction::Activate => CampaignStatus::Active,
        };
        let api = status_api.clone();
        spawn(async move {
            busy.set(true);
            match api.set_campaign_status(&campaign.id, &StatusUpdate::new(status.clone())).await {
                Ok(()) => {
                    tracing::info!("Campaign {} set to {}", campaign.id, status);
                    action_error.set(None);
                    campaigns.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to change campaign status: {}", e);
                    action_error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    let delete_api = api.clone();
    let confirm_delete = move |_| {
        let Some(campaign) = pending_delete() else {
            return;
        };
        let api = delete_api.clone();
        spawn(async move {
            busy.set(true);
            match api.delete_campaign(&campaign.id).await {
                Ok(()) => {
                    tracing::info!("Deleted campaign {}", campaign.id);
                    action_error.set(None);
                    campaigns.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to delete campaign: {}", e);
                    action_error.set(Some(e.to_string()));
                }
            }
            pending_delete.set(None);
            busy.set(false);
        });
    };

    let list = match &*campaigns.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
        Some(Ok(list)) => rsx! {
            CampaignTable { campaigns: list.clone(), on_action }
        },
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "{t(lang(), Key::Campaigns)}" }
            Link { to: Route::NewCampaign {}, class: "btn btn-primary", "{t(lang(), Key::NewCampaign)}" }
        }
        if let Some(message) = action_error() {
            ErrorText { message }
        }
        {list}

        if let Some(campaign) = pending_delete() {
            ConfirmModal {
                title: t(lang(), Key::Delete).to_string(),
                message: format!("Delete \"{}\"? This cannot be undone.", campaign.title),
                confirm_label: t(lang(), Key::Delete).to_string(),
                cancel_label: t(lang(), Key::Cancel).to_string(),
                busy: busy(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
