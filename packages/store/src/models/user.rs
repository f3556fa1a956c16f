//! Account records as returned by `getuser`, `getAllUsers` and `getOneUser`.
//!
//! The password is write-only: it appears in registration and reset request
//! bodies but never in a decoded [`User`].

use serde::{Deserialize, Serialize};

use super::{Campaign, Transaction};
use crate::Language;

/// Role of an account. Anything the backend sends that we do not know is
/// treated as a regular user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

/// Profile of a signed-in account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Wallet balance, mutated only by backend payment operations.
    #[serde(default)]
    pub balance: f64,
    /// Discount percentage applied by the backend when charging.
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub preferred_language: Language,
    #[serde(default)]
    pub user_type: UserType,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }

    /// Name shown in the navbar; the email stands in when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A user as seen from the admin back-office, with their campaigns and
/// wallet history when the backend includes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_profile() {
        let user: User = serde_json::from_str(
            r#"{
                "_id": "65f0c2",
                "name": "Nadia",
                "email": "nadia@example.com",
                "phone": "+212600000000",
                "balance": 120.5,
                "discount": 10,
                "preferredLanguage": "ar",
                "userType": "admin",
                "createdAt": "2024-01-01T00:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, "65f0c2");
        assert_eq!(user.balance, 120.5);
        assert_eq!(user.discount, 10.0);
        assert_eq!(user.preferred_language, Language::Arabic);
        assert!(user.is_admin());
    }

    #[test]
    fn test_missing_fields_default() {
        let user: User =
            serde_json::from_str(r#"{"id": "1", "name": "", "email": "a@b.c", "userType": "advertiser"}"#)
                .unwrap();
        assert_eq!(user.user_type, UserType::User);
        assert_eq!(user.balance, 0.0);
        assert_eq!(user.preferred_language, Language::English);
        assert_eq!(user.display_name(), "a@b.c");
    }

    #[test]
    fn test_detail_includes_campaigns() {
        let detail: UserDetail = serde_json::from_str(
            r#"{
                "id": "7",
                "name": "Omar",
                "email": "omar@example.com",
                "campaigns": [{"id": "c1", "title": "Spring sale", "status": "active"}]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.user.name, "Omar");
        assert_eq!(detail.campaigns.len(), 1);
        assert!(detail.transactions.is_empty());
    }
}
