//! Read-only tables for campaigns, wallet movements and accounts.

use dioxus::prelude::*;
use store::{Campaign, Transaction, User};

use crate::auth::use_config;
use crate::format;
use crate::i18n::{t, use_language, Key};
use crate::StatusBadge;

/// Row action requested from a [`CampaignTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignAction {
    Open,
    Edit,
    Stop,
    Activate,
    Delete,
}

/// Actions a row offers for its campaign's status. Admin rows only open the
/// review screen.
pub fn actions_for(campaign: &Campaign, admin: bool) -> Vec<CampaignAction> {
    if admin {
        return vec![CampaignAction::Open];
    }
    let status = &campaign.status;
    let mut actions = Vec::new();
    if status.can_edit() {
        actions.push(CampaignAction::Edit);
    }
    if status.can_stop() {
        actions.push(CampaignAction::Stop);
    }
    if status.can_activate() {
        actions.push(CampaignAction::Activate);
    }
    if status.can_delete() {
        actions.push(CampaignAction::Delete);
    }
    actions
}

fn action_label(action: CampaignAction) -> Key {
    match action {
        CampaignAction::Open => Key::Review,
        CampaignAction::Edit => Key::Edit,
        CampaignAction::Stop => Key::Stop,
        CampaignAction::Activate => Key::Activate,
        CampaignAction::Delete => Key::Delete,
    }
}

#[component]
pub fn CampaignTable(
    campaigns: Vec<Campaign>,
    on_action: EventHandler<(CampaignAction, Campaign)>,
    #[props(default)] admin: bool,
) -> Element {
    let lang = use_language();
    let currency = use_config().ui.currency;

    if campaigns.is_empty() {
        return rsx! {
            p { class: "empty", "{t(lang(), Key::NoData)}" }
        };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "{t(lang(), Key::Title)}" }
                    th { "{t(lang(), Key::Status)}" }
                    th { "{t(lang(), Key::StartDate)}" }
                    th { "{t(lang(), Key::EndDate)}" }
                    th { "{t(lang(), Key::Budget)}" }
                    th { "{t(lang(), Key::Views)}" }
                    th { "{t(lang(), Key::Clicks)}" }
                    th { "{t(lang(), Key::Actions)}" }
                }
            }
            tbody {
                for campaign in campaigns {
                    tr {
                        key: "{campaign.id}",
                        td {
                            "{campaign.title}"
                            if let Some(message) = campaign.admin_message.clone() {
                                small { class: "admin-message", "{message}" }
                            }
                        }
                        td { StatusBadge { status: campaign.status.clone() } }
                        td { "{format::day(&campaign.start_date)}" }
                        td { "{format::day(&campaign.end_date)}" }
                        td { "{format::money(campaign.budget, &currency)}" }
                        td { "{format::count(campaign.views)}" }
                        td { "{format::count(campaign.clicks)}" }
                        td {
                            class: "row-actions",
                            for action in actions_for(&campaign, admin) {
                                button {
                                    key: "{action:?}",
                                    class: if action == CampaignAction::Delete { "btn btn-small btn-danger" } else { "btn btn-small" },
                                    onclick: {
                                        let campaign = campaign.clone();
                                        move |_| on_action.call((action, campaign.clone()))
                                    },
                                    "{t(lang(), action_label(action))}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TransactionTable(transactions: Vec<Transaction>) -> Element {
    let lang = use_language();
    let currency = use_config().ui.currency;

    if transactions.is_empty() {
        return rsx! {
            p { class: "empty", "{t(lang(), Key::NoData)}" }
        };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Date" }
                    th { "Type" }
                    th { "{t(lang(), Key::PaymentMethod)}" }
                    th { "{t(lang(), Key::Amount)}" }
                }
            }
            tbody {
                for (i, tx) in transactions.into_iter().enumerate() {
                    tr {
                        key: "{i}",
                        td { "{format::day(&tx.created_at)}" }
                        td { "{tx.kind}" }
                        td { {tx.payment_method.clone().unwrap_or_else(|| "-".to_string())} }
                        td {
                            class: if tx.is_credit() { "amount-credit" } else { "amount-debit" },
                            "{format::money(tx.amount, &currency)}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn UserTable(users: Vec<User>, on_open: EventHandler<User>) -> Element {
    let lang = use_language();
    let currency = use_config().ui.currency;

    if users.is_empty() {
        return rsx! {
            p { class: "empty", "{t(lang(), Key::NoData)}" }
        };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "{t(lang(), Key::Name)}" }
                    th { "{t(lang(), Key::Email)}" }
                    th { "{t(lang(), Key::Phone)}" }
                    th { "{t(lang(), Key::Balance)}" }
                    th { "{t(lang(), Key::Actions)}" }
                }
            }
            tbody {
                for user in users {
                    tr {
                        key: "{user.id}",
                        td { "{user.display_name()}" }
                        td { "{user.email}" }
                        td { {user.phone.clone().unwrap_or_default()} }
                        td { "{format::money(user.balance, &currency)}" }
                        td {
                            button {
                                class: "btn btn-small",
                                onclick: {
                                    let user = user.clone();
                                    move |_| on_open.call(user.clone())
                                },
                                "{t(lang(), Key::Review)}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::CampaignStatus;

    fn campaign(status: CampaignStatus) -> Campaign {
        Campaign {
            id: "c1".to_string(),
            title: "Promo".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            budget: 50.0,
            country: String::new(),
            targeted_cities: Vec::new(),
            photo_path: String::new(),
            link: String::new(),
            gender: Default::default(),
            status,
            views: 0,
            clicks: 0,
            money_spent: 0.0,
            admin_message: None,
        }
    }

    #[test]
    fn test_actions_follow_status() {
        use CampaignAction::*;
        assert_eq!(actions_for(&campaign(CampaignStatus::Active), false), vec![Stop]);
        assert_eq!(
            actions_for(&campaign(CampaignStatus::Stopped), false),
            vec![Edit, Activate]
        );
        assert_eq!(
            actions_for(&campaign(CampaignStatus::Draft), false),
            vec![Edit, Delete]
        );
        assert!(actions_for(&campaign(CampaignStatus::InReview), false).is_empty());
    }

    #[test]
    fn test_admin_rows_only_open() {
        assert_eq!(
            actions_for(&campaign(CampaignStatus::Draft), true),
            vec![CampaignAction::Open]
        );
    }
}
