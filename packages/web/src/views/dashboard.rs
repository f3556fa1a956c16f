use dioxus::prelude::*;
use ui::format;
use ui::{t, use_api, use_config, use_language, use_profile, ErrorText, Key, Spinner, StatCard};

use crate::Route;

/// Overview: wallet figures from the profile and totals from `user-stats`.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let lang = use_language();
    let profile = use_profile();
    let currency = use_config().ui.currency;

    let stats = use_resource(move || {
        let api = api.clone();
        async move { api.get_user_stats().await }
    });

    let user = profile.read().clone();

    rsx! {
        div {
            class: "page-header",
            h1 {
                "{t(lang(), Key::Dashboard)}"
            }
            Link { to: Route::NewCampaign {}, class: "btn btn-primary", "{t(lang(), Key::NewCampaign)}" }
        }

        if let Some(user) = user {
            div {
                class: "stat-grid",
                StatCard { label: t(lang(), Key::Balance).to_string(), value: format::money(user.balance, &currency) }
                StatCard { label: t(lang(), Key::Discount).to_string(), value: format::percent(user.discount) }
            }
        }

        {match &*stats.read() {
            None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
            Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
            Some(Ok(stats)) => rsx! {
                div {
                    class: "stat-grid",
                    StatCard { label: t(lang(), Key::Campaigns).to_string(), value: format::count(stats.total_campaigns) }
                    StatCard { label: "Active".to_string(), value: format::count(stats.active_campaigns) }
                    StatCard { label: t(lang(), Key::Views).to_string(), value: format::count(stats.total_views) }
                    StatCard { label: t(lang(), Key::Clicks).to_string(), value: format::count(stats.total_clicks) }
                    StatCard { label: t(lang(), Key::ClickThroughRate).to_string(), value: format::percent(stats.click_through_rate()) }
                    StatCard { label: t(lang(), Key::Spent).to_string(), value: format::money(stats.total_spent, &currency) }
                }
            },
        }}
    }
}
