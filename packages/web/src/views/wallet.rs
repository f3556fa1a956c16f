//! Balance, discount, top-ups and transaction history.
//!
//! A top-up asks the backend for a provider checkout URL and leaves the app;
//! the provider sends the browser back to [`crate::Route::PaymentReturn`].

use api::ApiError;
use dioxus::prelude::*;
use store::PaymentMethod;
use ui::format;
use ui::{
    open_external, t, use_api, use_config, use_language, use_profile, ErrorText, Key, Spinner,
    StatCard, TransactionTable,
};

/// Amount typed into the top-up field, if it is a positive number.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
}

/// Methods offered in the top-up picker. A failed fetch leaves the picker
/// empty and is logged once, when the response arrives.
fn offered_methods(result: Result<Vec<PaymentMethod>, ApiError>) -> Vec<PaymentMethod> {
    result.unwrap_or_else(|e| {
        tracing::warn!("Failed to load payment methods: {}", e);
        Vec::new()
    })
}

#[component]
pub fn Wallet() -> Element {
    let api = use_api();
    let lang = use_language();
    let mut profile = use_profile();
    let currency = use_config().ui.currency;
    let mut amount = use_signal(String::new);
    let mut method = use_signal(String::new);
    let mut redirecting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let profile_api = api.clone();
    let _refresh = use_resource(move || {
        let api = profile_api.clone();
        async move {
            match api.get_current_user().await {
                Ok(user) => profile.set(Some(user)),
                Err(e) => tracing::warn!("Failed to refresh balance: {}", e),
            }
        }
    });

    let methods_api = api.clone();
    let methods = use_resource(move || {
        let api = methods_api.clone();
        async move { offered_methods(api.get_payment_methods().await) }
    });

    let history_api = api.clone();
    let transactions = use_resource(move || {
        let api = history_api.clone();
        async move { api.get_transactions().await }
    });

    let handle_top_up = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let Some(value) = parse_amount(&amount()) else {
                error.set(Some("Please enter a positive amount".to_string()));
                return;
            };
            if method().is_empty() {
                error.set(Some("Please choose a payment method".to_string()));
                return;
            }
            redirecting.set(true);
            match api.get_payment_url(value, &method()).await {
                Ok(session) => {
                    tracing::info!("Redirecting to payment provider");
                    error.set(None);
                    open_external(&session.url);
                }
                Err(e) => {
                    tracing::error!("Failed to start payment: {}", e);
                    error.set(Some(e.to_string()));
                    redirecting.set(false);
                }
            }
        }
    };

    let user = profile.read().clone();

    let method_options = methods.read().clone().unwrap_or_default();

    let history = match &*transactions.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(e)) => rsx! { ErrorText { message: e.to_string() } },
        Some(Ok(list)) => rsx! { TransactionTable { transactions: list.clone() } },
    };

    rsx! {
        h1 { "{t(lang(), Key::Wallet)}" }

        if let Some(user) = user {
            div {
                class: "stat-grid",
                StatCard { label: t(lang(), Key::Balance).to_string(), value: format::money(user.balance, &currency) }
                StatCard { label: t(lang(), Key::Discount).to_string(), value: format::percent(user.discount) }
            }
        }

        section {
            class: "card",
            h2 { "{t(lang(), Key::TopUp)}" }
            form {
                class: "inline-form",
                onsubmit: handle_top_up,
                div {
                    class: "field",
                    label { r#for: "topup-amount", "{t(lang(), Key::Amount)} ({currency})" }
                    input {
                        id: "topup-amount",
                        r#type: "number",
                        min: "1",
                        step: "0.01",
                        value: "{amount}",
                        oninput: move |evt: FormEvent| amount.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    label { r#for: "topup-method", "{t(lang(), Key::PaymentMethod)}" }
                    select {
                        id: "topup-method",
                        onchange: move |evt: FormEvent| method.set(evt.value()),
                        option { value: "", selected: method().is_empty(), "-" }
                        for m in method_options {
                            option {
                                key: "{m.id}",
                                value: "{m.id}",
                                selected: m.id == method(),
                                "{m.name}"
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: redirecting(),
                    "{t(lang(), Key::TopUp)}"
                }
            }
            if let Some(message) = error() {
                ErrorText { message }
            }
        }

        section {
            class: "card",
            h2 { "{t(lang(), Key::Transactions)}" }
            {history}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 25.5 "), Some(25.5));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-4"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_offered_methods() {
        let card = PaymentMethod {
            id: "card".to_string(),
            name: "Card".to_string(),
            logo: None,
        };
        assert_eq!(offered_methods(Ok(vec![card.clone()])), vec![card]);
        assert!(offered_methods(Err(ApiError::Network("offline".to_string()))).is_empty());
    }
}
