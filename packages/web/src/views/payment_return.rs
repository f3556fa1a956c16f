use dioxus::prelude::*;
use ui::format;
use ui::{t, use_api, use_config, use_language, use_profile, ErrorText, Key, Spinner, SuccessText};

use crate::Route;

/// Landing page after the payment provider redirects back. Asks the backend
/// how the payment ended and refreshes the balance when it went through.
#[component]
pub fn PaymentReturn(payment_id: String) -> Element {
    let api = use_api();
    let lang = use_language();
    let mut profile = use_profile();
    let currency = use_config().ui.currency;

    let check = use_resource(use_reactive!(|payment_id| {
        let api = api.clone();
        async move {
            if payment_id.trim().is_empty() {
                return Err("No payment reference was returned.".to_string());
            }
            let result = api.check_payment(&payment_id).await.map_err(|e| {
                tracing::error!("Payment check failed: {}", e);
                e.to_string()
            })?;
            if result.is_paid() {
                tracing::info!("Payment {} settled", payment_id);
                match api.get_current_user().await {
                    Ok(user) => profile.set(Some(user)),
                    Err(e) => tracing::warn!("Failed to refresh balance: {}", e),
                }
            }
            Ok(result)
        }
    }));

    let body = match &*check.read() {
        None => rsx! { Spinner { label: t(lang(), Key::Loading).to_string() } },
        Some(Err(message)) => rsx! { ErrorText { message: message.clone() } },
        Some(Ok(result)) if result.is_paid() => {
            let mut message = result
                .message
                .clone()
                .unwrap_or_else(|| "Payment received. Thank you!".to_string());
            if let Some(balance) = result.balance {
                message = format!("{message} {}: {}", t(lang(), Key::Balance), format::money(balance, &currency));
            }
            rsx! { SuccessText { message } }
        }
        Some(Ok(result)) if result.is_pending() => rsx! {
            p { class: "notice", "The payment is still being processed. Check back in a moment." }
        },
        Some(Ok(result)) => rsx! {
            ErrorText {
                message: result
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Payment {}", result.status)),
            }
        },
    };

    rsx! {
        h1 { "{t(lang(), Key::Wallet)}" }
        {body}
        Link { to: Route::Wallet {}, class: "btn btn-outline", "{t(lang(), Key::Wallet)}" }
    }
}
