//! Typed errors for every REST call.
//!
//! The backend signals failures with HTTP status codes and, usually, a JSON
//! body carrying a `message` (or `error`) field. [`ApiError::from_response`]
//! folds both into one variant per status class so call sites can match on
//! meaning instead of integers.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// HTTP 400.
    #[error("{0}")]
    BadRequest(String),
    /// HTTP 401. For the profile endpoint this means the email is unverified.
    #[error("{0}")]
    Unauthorized(String),
    /// HTTP 403.
    #[error("{0}")]
    Forbidden(String),
    /// HTTP 404.
    #[error("{0}")]
    NotFound(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not signed in")]
    MissingToken,
    #[error("invalid API address: {0}")]
    InvalidUrl(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

impl ApiError {
    /// Build an error from a non-2xx response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        let or = |fallback: &str| message.clone().unwrap_or_else(|| fallback.to_string());
        match status {
            400 => ApiError::BadRequest(or("Bad request")),
            401 => ApiError::Unauthorized(or("Unauthorized")),
            403 => ApiError::Forbidden(or("Forbidden")),
            404 => ApiError::NotFound(or("Not found")),
            _ => ApiError::Server {
                status,
                message: or("Request failed"),
            },
        }
    }

    /// HTTP status this error came from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest(_) => Some(400),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed
            .message
            .or(parsed.error)
            .or(parsed.msg)
            .filter(|m| !m.trim().is_empty());
    }
    // Plain-text bodies are shown as-is; HTML error pages are not.
    if body.starts_with('<') || body.len() > 200 {
        return None;
    }
    Some(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(
            ApiError::from_response(400, r#"{"message": "User not found"}"#),
            ApiError::BadRequest("User not found".to_string())
        );
        assert_eq!(
            ApiError::from_response(401, r#"{"error": "Email not verified"}"#),
            ApiError::Unauthorized("Email not verified".to_string())
        );
        assert_eq!(
            ApiError::from_response(403, ""),
            ApiError::Forbidden("Forbidden".to_string())
        );
        assert_eq!(
            ApiError::from_response(404, "No such campaign"),
            ApiError::NotFound("No such campaign".to_string())
        );
        assert_eq!(
            ApiError::from_response(502, "<html><body>Bad gateway</body></html>"),
            ApiError::Server {
                status: 502,
                message: "Request failed".to_string()
            }
        );
    }

    #[test]
    fn test_status_round_trips_through_variant() {
        for status in [400, 401, 403, 404, 500, 503] {
            assert_eq!(ApiError::from_response(status, "").status(), Some(status));
        }
        assert_eq!(ApiError::MissingToken.status(), None);
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_display_uses_backend_message() {
        let err = ApiError::from_response(400, r#"{"message": "Budget too low"}"#);
        assert_eq!(err.to_string(), "Budget too low");

        let err = ApiError::from_response(500, r#"{"message": ""}"#);
        assert_eq!(err.to_string(), "server error (500): Request failed");
    }
}
