//! Account lifecycle calls: sign-in, sign-up, email confirmation and
//! password reset. None of these need a bearer token.

use serde::{Deserialize, Serialize};
use store::Language;

use crate::{ApiClient, ApiError, Endpoint};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(alias = "accessToken")]
    token: String,
}

/// Sign-up form as sent to `auth/register`.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub preferred_language: Language,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct NewPasswordBody<'a> {
    token: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct TokenBody<'a> {
    token: &'a str,
}

impl ApiClient {
    /// Exchange credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let endpoint = Endpoint::Login;
        let builder = self.request(&endpoint)?.json(&Credentials {
            email: email.trim(),
            password,
        });
        let response: TokenResponse = self.send(&endpoint, builder).await?;
        if response.token.is_empty() {
            return Err(ApiError::Decode("empty token".to_string()));
        }
        Ok(response.token)
    }

    /// Create an account. The backend emails a confirmation link and answers
    /// with a message to show.
    pub async fn register(&self, registration: &Registration) -> Result<String, ApiError> {
        let endpoint = Endpoint::Register;
        let builder = self.request(&endpoint)?.json(registration);
        self.send_message(&endpoint, builder).await
    }

    /// Follow the confirmation link sent by email.
    pub async fn confirm_email(&self, token: &str) -> Result<String, ApiError> {
        let endpoint = Endpoint::Confirm(token.to_string());
        let builder = self.request(&endpoint)?;
        self.send_message(&endpoint, builder).await
    }

    /// Ask for a password reset email.
    pub async fn request_password_reset(&self, email: &str) -> Result<String, ApiError> {
        let endpoint = Endpoint::ResetPassword;
        let builder = self.request(&endpoint)?.json(&EmailBody {
            email: email.trim(),
        });
        self.send_message(&endpoint, builder).await
    }

    /// Check that a reset token from an email link is still valid.
    pub async fn verify_reset_token(&self, token: &str) -> Result<(), ApiError> {
        let endpoint = Endpoint::VerifyToken;
        let builder = self.request(&endpoint)?.json(&TokenBody { token });
        self.send_unit(&endpoint, builder).await
    }

    /// Set a new password using a reset token.
    pub async fn set_new_password(&self, token: &str, password: &str) -> Result<String, ApiError> {
        let endpoint = Endpoint::NewPassword;
        let builder = self
            .request(&endpoint)?
            .json(&NewPasswordBody { token, password });
        self.send_message(&endpoint, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_body() {
        let registration = Registration {
            name: "Yasmine".to_string(),
            email: "y@example.com".to_string(),
            phone: "+33600000000".to_string(),
            password: "hunter2hunter2".to_string(),
            preferred_language: Language::French,
        };
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["preferredLanguage"], "fr");
        assert_eq!(json["phone"], "+33600000000");
    }

    #[test]
    fn test_token_alias() {
        let a: TokenResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        let b: TokenResponse = serde_json::from_str(r#"{"accessToken": "abc"}"#).unwrap();
        assert_eq!(a.token, b.token);
    }

    #[test]
    fn test_login_request_is_public_json_post() {
        let api = ApiClient::new("http://localhost:5000/api");
        let request = api
            .request(&Endpoint::Login)
            .unwrap()
            .json(&Credentials {
                email: "a@b.c",
                password: "secret",
            })
            .build()
            .unwrap();
        assert_eq!(request.url().path(), "/api/auth/login");
        assert_eq!(
            request.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
