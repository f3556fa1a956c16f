//! HTTP plumbing shared by every resource module.

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{ApiError, Endpoint};

/// REST client bound to a base URL and, once signed in, a bearer token.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// A copy of this client carrying the given token.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL of an endpoint, with dynamic segments percent-encoded.
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?;
            segments.pop_if_empty();
            for segment in endpoint.segments() {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// Start a request, attaching the bearer token when the endpoint needs one.
    pub fn request(&self, endpoint: &Endpoint) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(endpoint.method(), self.url(endpoint)?);
        if !endpoint.requires_auth() {
            return Ok(builder);
        }
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        Ok(builder.bearer_auth(token))
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.execute(endpoint, builder).await?;
        decode_body(&body)
    }

    /// Send and ignore whatever the backend answers on success.
    pub(crate) async fn send_unit(
        &self,
        endpoint: &Endpoint,
        builder: RequestBuilder,
    ) -> Result<(), ApiError> {
        self.execute(endpoint, builder).await.map(|_| ())
    }

    /// Send and return the backend's `message`, if it sent one.
    pub(crate) async fn send_message(
        &self,
        endpoint: &Endpoint,
        builder: RequestBuilder,
    ) -> Result<String, ApiError> {
        let body = self.execute(endpoint, builder).await?;
        Ok(message_of(&body))
    }

    async fn execute(&self, endpoint: &Endpoint, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", endpoint.method(), endpoint.path(), e);
            ApiError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            let err = ApiError::from_response(status, &body);
            tracing::warn!("{} {} -> {}: {}", endpoint.method(), endpoint.path(), status, err);
            return Err(err);
        }
        tracing::debug!("{} {} -> {}", endpoint.method(), endpoint.path(), status);
        Ok(body)
    }
}

/// Decode a success body, accepting either the bare value or `{"data": value}`.
///
/// The envelope is tried first: types with defaulted fields would otherwise
/// decode the wrapper itself as an all-default value.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(inner) = value.get("data") {
        if let Ok(decoded) = serde_json::from_value::<T>(inner.clone()) {
            return Ok(decoded);
        }
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn message_of(body: &str) -> String {
    match serde_json::from_str::<MessageBody>(body) {
        Ok(parsed) => parsed.message.unwrap_or_default(),
        Err(_) if body.trim_start().starts_with(['{', '[', '<']) => String::new(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use reqwest::Method;
    use store::{User, UserStats};

    fn client() -> ApiClient {
        ApiClient::new("https://ads.example.com/api/")
    }

    #[test]
    fn test_url_joins_base_path() {
        let url = client().url(&Endpoint::CurrentUser).unwrap();
        assert_eq!(url.as_str(), "https://ads.example.com/api/user/getuser");
    }

    #[test]
    fn test_url_encodes_dynamic_segments() {
        let url = client()
            .url(&Endpoint::Cities("United States".to_string()))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://ads.example.com/api/campaign/cities/United%20States"
        );

        let url = client().url(&Endpoint::Campaign("a/b".to_string())).unwrap();
        assert_eq!(url.as_str(), "https://ads.example.com/api/campaign/a%2Fb");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::new("not a url").url(&Endpoint::Login).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_bearer_header_on_authenticated_calls() {
        let api = client().with_token(Some("tok-123".to_string()));
        let request = api.request(&Endpoint::UserStats).unwrap().build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer tok-123"
        );
    }

    #[test]
    fn test_public_calls_carry_no_token() {
        let api = client().with_token(Some("tok-123".to_string()));
        let request = api.request(&Endpoint::Countries).unwrap().build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_missing_token() {
        assert_eq!(
            client().request(&Endpoint::CurrentUser).unwrap_err(),
            ApiError::MissingToken
        );
        let api = client().with_token(Some(String::new()));
        assert_eq!(api.token(), None);
        assert_eq!(
            api.request(&Endpoint::Transactions).unwrap_err(),
            ApiError::MissingToken
        );
    }

    #[test]
    fn test_decode_bare_and_wrapped() {
        let bare = r#"{"id": "1", "name": "Sara", "email": "s@example.com"}"#;
        let wrapped = r#"{"data": {"id": "1", "name": "Sara", "email": "s@example.com"}}"#;
        let a: User = decode_body(bare).unwrap();
        let b: User = decode_body(wrapped).unwrap();
        assert_eq!(a, b);

        let err = decode_body::<User>(r#"{"unexpected": true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(matches!(decode_body::<User>("").unwrap_err(), ApiError::Decode(_)));
    }

    #[test]
    fn test_wrapped_stats_keep_their_figures() {
        let stats: UserStats =
            decode_body(r#"{"data": {"totalCampaigns": 4, "totalViews": 1000}}"#).unwrap();
        assert_eq!(stats.total_campaigns, 4);
        assert_eq!(stats.total_views, 1000);
        assert_eq!(stats.total_clicks, 0);

        let bare: UserStats = decode_body(r#"{"totalCampaigns": 4, "totalViews": 1000}"#).unwrap();
        assert_eq!(bare, stats);
    }

    #[test]
    fn test_message_of() {
        assert_eq!(message_of(r#"{"message": "Check your inbox"}"#), "Check your inbox");
        assert_eq!(message_of(r#"{"ok": true}"#), "");
        assert_eq!(message_of("Password updated\n"), "Password updated");
        assert_eq!(message_of(""), "");
    }
}
