use serde::{Deserialize, Serialize};

/// A wallet movement, displayed read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Transaction {
    /// Whether the movement adds to the balance.
    pub fn is_credit(&self) -> bool {
        matches!(
            self.kind.to_ascii_lowercase().as_str(),
            "deposit" | "credit" | "refund" | "top-up" | "topup"
        )
    }
}

/// A payment provider offered for wallet top-ups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Where to send the user to complete a top-up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSession {
    #[serde(alias = "paymentURL", alias = "paymentUrl")]
    pub url: String,
    #[serde(default)]
    pub payment_id: Option<String>,
}

/// Settlement state reported by `checkPayment`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCheck {
    pub status: String,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PaymentCheck {
    pub fn is_paid(&self) -> bool {
        matches!(
            self.status.to_ascii_lowercase().as_str(),
            "paid" | "success" | "succeeded" | "completed"
        )
    }

    pub fn is_pending(&self) -> bool {
        matches!(
            self.status.to_ascii_lowercase().as_str(),
            "pending" | "processing" | "created"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_transactions() {
        let txs: Vec<Transaction> = serde_json::from_str(
            r#"[
                {"type": "deposit", "amount": 100, "paymentMethod": "card", "createdAt": "2024-02-02T10:00:00Z"},
                {"type": "campaign spend", "amount": 12.5}
            ]"#,
        )
        .unwrap();
        assert!(txs[0].is_credit());
        assert!(!txs[1].is_credit());
        assert_eq!(txs[1].payment_method, None);
    }

    #[test]
    fn test_payment_session_aliases() {
        let session: PaymentSession =
            serde_json::from_str(r#"{"paymentURL": "https://pay.example.com/s/1", "paymentId": "p1"}"#)
                .unwrap();
        assert_eq!(session.url, "https://pay.example.com/s/1");
        assert_eq!(session.payment_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_payment_check_states() {
        let check: PaymentCheck = serde_json::from_str(r#"{"status": "PAID", "balance": 150}"#).unwrap();
        assert!(check.is_paid());
        assert_eq!(check.balance, Some(150.0));

        let check: PaymentCheck = serde_json::from_str(r#"{"status": "pending"}"#).unwrap();
        assert!(!check.is_paid());
        assert!(check.is_pending());
    }
}
