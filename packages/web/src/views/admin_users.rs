use dioxus::prelude::*;
use ui::format;
use ui::{
    t, use_api, use_config, use_language, CampaignTable, ErrorText, Key, Spinner, StatCard,
    SuccessText, TransactionTable, UserTable,
};

use crate::Route;

#[component]
pub fn AdminUsers() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let lang = use_language();

    let users = use_resource(move || {
        let api = api.clone();
        async move { api.get_all_users().await }
    });

    let body = match &*users.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
        Some(Ok(list)) => rsx! {
            UserTable {
                users: list.clone(),
                on_open: move |user: store::User| {
                    nav.push(Route::AdminUser { id: user.id });
                },
            }
        },
    };

    rsx! {
        h1 { "{t(lang(), Key::Users)}" }
        {body}
    }
}

/// One account: profile, wallet, campaigns, and a manual balance credit.
#[component]
pub fn AdminUser(id: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let lang = use_language();
    let currency = use_config().ui.currency;
    let mut amount = use_signal(String::new);
    let mut crediting = use_signal(|| false);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);

    let load_api = api.clone();
    let mut detail = use_resource(use_reactive!(|id| {
        let api = load_api.clone();
        async move { api.get_one_user(&id).await }
    }));

    let handle_credit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let Some(user_id) = detail
                .read()
                .as_ref()
                .and_then(|r| r.as_ref().ok())
                .map(|d| d.user.id.clone())
            else {
                return;
            };
            let Some(value) = amount().trim().parse::<f64>().ok().filter(|a| a.is_finite() && *a > 0.0) else {
                status.set(Some(Err("Please enter a positive amount".to_string())));
                return;
            };
            crediting.set(true);
            match api.increase_balance(&user_id, value).await {
                Ok(message) => {
                    tracing::info!("Credited {} to user {}", value, user_id);
                    amount.set(String::new());
                    status.set(Some(Ok(if message.trim().is_empty() {
                        "Balance updated".to_string()
                    } else {
                        message
                    })));
                    detail.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to credit user {}: {}", user_id, e);
                    status.set(Some(Err(e.to_string())));
                }
            }
            crediting.set(false);
        }
    };

    let body = match &*detail.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
        Some(Ok(info)) => {
            let user = info.user.clone();
            rsx! {
                h1 { "{user.display_name()}" }
                p { class: "hint", "{user.email}" }
                div {
                    class: "stat-grid",
                    StatCard { label: t(lang(), Key::Balance).to_string(), value: format::money(user.balance, &currency) }
                    StatCard { label: t(lang(), Key::Discount).to_string(), value: format::percent(user.discount) }
                }

                section {
                    class: "card",
                    h2 { "{t(lang(), Key::TopUp)}" }
                    form {
                        class: "inline-form",
                        onsubmit: handle_credit,
                        div {
                            class: "field",
                            label { r#for: "credit-amount", "{t(lang(), Key::Amount)} ({currency})" }
                            input {
                                id: "credit-amount",
                                r#type: "number",
                                min: "1",
                                step: "0.01",
                                value: "{amount}",
                                oninput: move |evt: FormEvent| amount.set(evt.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: crediting(),
                            "{t(lang(), Key::TopUp)}"
                        }
                    }
                    {match status() {
                        Some(Ok(message)) => rsx! { SuccessText { message } },
                        Some(Err(message)) => rsx! { ErrorText { message } },
                        None => rsx! {},
                    }}
                }

                section {
                    class: "card",
                    h2 { "{t(lang(), Key::Campaigns)}" }
                    CampaignTable {
                        campaigns: info.campaigns.clone(),
                        admin: true,
                        on_action: move |(_, campaign): (ui::CampaignAction, store::Campaign)| {
                            nav.push(Route::AdminCampaign { id: campaign.id });
                        },
                    }
                }

                section {
                    class: "card",
                    h2 { "{t(lang(), Key::Transactions)}" }
                    TransactionTable { transactions: info.transactions.clone() }
                }
            }
        }
    };

    rsx! {
        Link { to: Route::AdminUsers {}, class: "back-link", "{t(lang(), Key::Users)}" }
        {body}
    }
}
