use serde::Serialize;
use store::models::UserDetail;
use store::{Language, User};

use crate::{ApiClient, ApiError, Endpoint};

/// Editable profile fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
    pub preferred_language: Language,
}

impl ApiClient {
    /// Profile of the signed-in account. A 400 means the account no longer
    /// exists; a 401 means its email has not been verified yet.
    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        let endpoint = Endpoint::CurrentUser;
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let endpoint = Endpoint::UpdateProfile;
        let builder = self.request(&endpoint)?.json(update);
        self.send_unit(&endpoint, builder).await
    }

    /// Every account (admin only).
    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        let endpoint = Endpoint::AllUsers;
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }

    /// One account with its campaigns and transactions (admin only).
    pub async fn get_one_user(&self, id: &str) -> Result<UserDetail, ApiError> {
        let endpoint = Endpoint::OneUser(id.to_string());
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_profile_needs_token() {
        let api = ApiClient::new("http://localhost:5000/api");
        assert_eq!(api.get_current_user().await.unwrap_err(), ApiError::MissingToken);
        assert_eq!(api.get_all_users().await.unwrap_err(), ApiError::MissingToken);
    }

    #[test]
    fn test_profile_update_body() {
        let update = ProfileUpdate {
            name: "Lina".to_string(),
            phone: "0600".to_string(),
            preferred_language: Language::Arabic,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Lina", "phone": "0600", "preferredLanguage": "ar"}));
    }
}
