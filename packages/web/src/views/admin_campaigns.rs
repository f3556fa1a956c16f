use dioxus::prelude::*;
use store::models::StatusUpdate;
use store::{Campaign, CampaignStatus};
use ui::format;
use ui::{
    status_label, t, use_api, use_config, use_language, CampaignAction, CampaignTable, ErrorText,
    Key, Spinner, StatusBadge, SuccessText,
};

use crate::Route;

/// Campaigns whose status matches the filter; an empty filter keeps all.
fn filter_by_status(campaigns: &[Campaign], filter: &str) -> Vec<Campaign> {
    if filter.is_empty() {
        return campaigns.to_vec();
    }
    let wanted = CampaignStatus::from(filter.to_string());
    campaigns
        .iter()
        .filter(|c| c.status == wanted)
        .cloned()
        .collect()
}

/// Every campaign in the system, filterable by status.
#[component]
pub fn AdminCampaigns() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let lang = use_language();
    let mut filter = use_signal(String::new);

    let campaigns = use_resource(move || {
        let api = api.clone();
        async move { api.get_all_campaigns().await }
    });

    let body = match &*campaigns.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
        Some(Ok(list)) => rsx! {
            CampaignTable {
                campaigns: filter_by_status(list, &filter()),
                admin: true,
                on_action: move |(_, campaign): (CampaignAction, Campaign)| {
                    nav.push(Route::AdminCampaign { id: campaign.id });
                },
            }
        },
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "{t(lang(), Key::AllCampaigns)}" }
            select {
                class: "status-filter",
                title: t(lang(), Key::Status),
                onchange: move |evt: FormEvent| filter.set(evt.value()),
                option { value: "", "{t(lang(), Key::Status)}: *" }
                for status in CampaignStatus::KNOWN {
                    option {
                        key: "{status.as_str()}",
                        value: status.as_str(),
                        selected: status.as_str() == filter(),
                        "{status_label(&status)}"
                    }
                }
            }
        }
        {body}
    }
}

/// Review screen: campaign details plus a status decision with an optional
/// message back to the owner.
#[component]
pub fn AdminCampaign(id: String) -> Element {
    let api = use_api();
    let lang = use_language();
    let currency = use_config().ui.currency;
    let mut decision = use_signal(|| Option::<CampaignStatus>::None);
    let mut message = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);

    let submit_id = id.clone();
    let load_api = api.clone();
    let mut campaign = use_resource(use_reactive!(|id| {
        let api = load_api.clone();
        async move { api.get_campaign(&id).await }
    }));

    let handle_review = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let id = submit_id.clone();
        async move {
            let Some(next) = decision() else {
                status.set(Some(Err("Please choose a status".to_string())));
                return;
            };
            let update = StatusUpdate::new(next.clone()).with_message(message());
            saving.set(true);
            match api.set_campaign_status(&id, &update).await {
                Ok(()) => {
                    tracing::info!("Campaign {} reviewed as {}", id, next);
                    status.set(Some(Ok("Review saved".to_string())));
                    campaign.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to review campaign {}: {}", id, e);
                    status.set(Some(Err(e.to_string())));
                }
            }
            saving.set(false);
        }
    };

    let body = match &*campaign.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
        Some(Ok(c)) => {
            let c = c.clone();
            let selected = decision().unwrap_or_else(|| c.status.clone());
            let cities = if c.targeted_cities.is_empty() {
                "-".to_string()
            } else {
                c.targeted_cities.join(", ")
            };
            rsx! {
                div {
                    class: "page-header",
                    h1 { "{c.title}" }
                    StatusBadge { status: c.status.clone() }
                }
                dl {
                    class: "details",
                    dt { "{t(lang(), Key::StartDate)}" }
                    dd { "{format::day(&c.start_date)}" }
                    dt { "{t(lang(), Key::EndDate)}" }
                    dd { "{format::day(&c.end_date)}" }
                    dt { "{t(lang(), Key::Budget)}" }
                    dd { "{format::money(c.budget, &currency)}" }
                    dt { "{t(lang(), Key::Spent)}" }
                    dd { "{format::money(c.money_spent, &currency)}" }
                    dt { "{t(lang(), Key::Country)}" }
                    dd { "{c.country}" }
                    dt { "{t(lang(), Key::Cities)}" }
                    dd { "{cities}" }
                    dt { "{t(lang(), Key::Gender)}" }
                    dd { "{c.gender.as_str()}" }
                    dt { "{t(lang(), Key::Photo)}" }
                    dd { "{c.photo_path}" }
                    dt { "{t(lang(), Key::Link)}" }
                    dd {
                        if c.link.is_empty() {
                            "-"
                        } else {
                            a { href: "{c.link}", target: "_blank", rel: "noopener", "{c.link}" }
                        }
                    }
                    dt { "{t(lang(), Key::Views)}" }
                    dd { "{format::count(c.views)}" }
                    dt { "{t(lang(), Key::Clicks)}" }
                    dd { "{format::count(c.clicks)}" }
                }

                form {
                    class: "card",
                    onsubmit: handle_review,
                    h2 { "{t(lang(), Key::Review)}" }
                    div {
                        class: "field",
                        label { r#for: "review-status", "{t(lang(), Key::Status)}" }
                        select {
                            id: "review-status",
                            onchange: move |evt: FormEvent| {
                                decision.set(Some(CampaignStatus::from(evt.value())))
                            },
                            for option_status in CampaignStatus::KNOWN {
                                option {
                                    key: "{option_status.as_str()}",
                                    value: option_status.as_str(),
                                    selected: option_status == selected,
                                    "{status_label(&option_status)}"
                                }
                            }
                        }
                    }
                    div {
                        class: "field",
                        label { r#for: "review-message", "Message" }
                        textarea {
                            id: "review-message",
                            rows: "3",
                            value: "{message}",
                            oninput: move |evt: FormEvent| message.set(evt.value()),
                        }
                    }
                    {match status() {
                        Some(Ok(text)) => rsx! { SuccessText { message: text } },
                        Some(Err(text)) => rsx! { ErrorText { message: text } },
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
    };

    rsx! {
        Link { to: Route::AdminCampaigns {}, class: "back-link", "{t(lang(), Key::AllCampaigns)}" }
        {body}
    }
}
