//! Wallet top-ups and history. Settlement happens entirely on the backend
//! and the payment provider; the client only starts a session, sends the
//! user to the provider, and asks afterwards how it went.

use serde::Serialize;
use store::models::{PaymentCheck, PaymentSession};
use store::{PaymentMethod, Transaction};

use crate::{ApiClient, ApiError, Endpoint};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentRequest<'a> {
    amount: f64,
    payment_method: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BalanceIncrease<'a> {
    user_id: &'a str,
    amount: f64,
}

impl ApiClient {
    pub async fn get_payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        let endpoint = Endpoint::PaymentMethods;
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }

    /// Open a provider checkout for `amount` and return where to redirect.
    pub async fn get_payment_url(
        &self,
        amount: f64,
        payment_method: &str,
    ) -> Result<PaymentSession, ApiError> {
        let endpoint = Endpoint::PaymentUrl;
        let builder = self.request(&endpoint)?.json(&PaymentRequest {
            amount,
            payment_method,
        });
        self.send(&endpoint, builder).await
    }

    pub async fn check_payment(&self, payment_id: &str) -> Result<PaymentCheck, ApiError> {
        let endpoint = Endpoint::CheckPayment(payment_id.to_string());
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }

    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let endpoint = Endpoint::Transactions;
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }

    /// Credit a user's wallet by hand (admin only).
    pub async fn increase_balance(&self, user_id: &str, amount: f64) -> Result<String, ApiError> {
        let endpoint = Endpoint::IncreaseBalance;
        let builder = self
            .request(&endpoint)?
            .json(&BalanceIncrease { user_id, amount });
        self.send_message(&endpoint, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_bodies() {
        let json = serde_json::to_value(PaymentRequest {
            amount: 25.0,
            payment_method: "card",
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"amount": 25.0, "paymentMethod": "card"}));

        let json = serde_json::to_value(BalanceIncrease {
            user_id: "u1",
            amount: 5.5,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"userId": "u1", "amount": 5.5}));
    }

    #[test]
    fn test_check_payment_url() {
        let api = ApiClient::new("http://localhost:5000/api").with_token(Some("t".to_string()));
        let request = api
            .request(&Endpoint::CheckPayment("pay_9".to_string()))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.url().path(), "/api/payment/checkPayment/pay_9");
    }
}
