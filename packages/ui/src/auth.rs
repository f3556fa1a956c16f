//! Session state shared through context.
//!
//! Two pieces of shared state live in context, mirroring the two slices the
//! app needs:
//!
//! - `Signal<AuthState>`: the bearer token and the request lifecycle of
//!   login and registration. Changed only through [`AuthState::apply`].
//! - `Signal<Option<User>>`: the cached profile of the signed-in user, filled
//!   by the dashboard gate and cleared on logout.
//!
//! The token is kept in memory only; a reload signs the user out.

use api::{ApiClient, ApiError, Registration, User};
use dioxus::prelude::*;
use store::AppConfig;

/// Lifecycle of one async auth request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Who is signed in, as far as this tab knows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub login: RequestStatus,
    pub register: RequestStatus,
    /// Last failure message, shown inline on the login/register forms.
    pub error: Option<String>,
    /// Message the backend sent back after a successful registration.
    pub notice: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    LoginSucceeded(String),
    LoginFailed(String),
    RegisterStarted,
    RegisterSucceeded(String),
    RegisterFailed(String),
    Logout,
    ClearMessages,
}

impl AuthState {
    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::LoginStarted => {
                self.login = RequestStatus::Pending;
                self.error = None;
                self.notice = None;
            }
            AuthAction::LoginSucceeded(token) => {
                self.login = RequestStatus::Succeeded;
                self.token = Some(token);
                self.error = None;
            }
            AuthAction::LoginFailed(message) => {
                self.login = RequestStatus::Failed;
                self.token = None;
                self.error = Some(message);
            }
            AuthAction::RegisterStarted => {
                self.register = RequestStatus::Pending;
                self.error = None;
                self.notice = None;
            }
            AuthAction::RegisterSucceeded(message) => {
                self.register = RequestStatus::Succeeded;
                self.notice = Some(message).filter(|m| !m.trim().is_empty());
            }
            AuthAction::RegisterFailed(message) => {
                self.register = RequestStatus::Failed;
                self.error = Some(message);
            }
            AuthAction::Logout => {
                *self = AuthState::default();
            }
            AuthAction::ClearMessages => {
                self.error = None;
                self.notice = None;
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn login_pending(&self) -> bool {
        self.login == RequestStatus::Pending
    }

    pub fn register_pending(&self) -> bool {
        self.register == RequestStatus::Pending
    }
}

/// Session signal provided by [`AuthProvider`].
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Cached profile of the signed-in user.
pub fn use_profile() -> Signal<Option<User>> {
    use_context::<Signal<Option<User>>>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// API client carrying the current token.
pub fn use_api() -> ApiClient {
    let base = use_context::<ApiClient>();
    let auth = use_auth();
    let token = auth.read().token.clone();
    base.with_token(token)
}

/// Puts the session signal, the API client and the app config into context.
#[component]
pub fn AuthProvider(config: AppConfig, children: Element) -> Element {
    let base_url = config.api.base_url.clone();
    use_context_provider(move || ApiClient::new(base_url));
    use_context_provider(move || config);
    use_context_provider(|| Signal::new(AuthState::default()));
    use_context_provider(|| Signal::new(Option::<User>::None));

    rsx! {
        {children}
    }
}

/// Sign in and store the token. Returns whether it worked; the failure
/// message is left in [`AuthState::error`].
pub async fn login(mut auth: Signal<AuthState>, api: ApiClient, email: String, password: String) -> bool {
    auth.write().apply(AuthAction::LoginStarted);
    match api.login(&email, &password).await {
        Ok(token) => {
            tracing::info!("Signed in as {}", email.trim());
            auth.write().apply(AuthAction::LoginSucceeded(token));
            true
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            auth.write().apply(AuthAction::LoginFailed(login_message(&e)));
            false
        }
    }
}

/// Create an account. Returns whether it worked.
pub async fn register(mut auth: Signal<AuthState>, api: ApiClient, registration: Registration) -> bool {
    auth.write().apply(AuthAction::RegisterStarted);
    match api.register(&registration).await {
        Ok(message) => {
            tracing::info!("Registered {}", registration.email);
            auth.write().apply(AuthAction::RegisterSucceeded(message));
            true
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            auth.write().apply(AuthAction::RegisterFailed(e.to_string()));
            false
        }
    }
}

/// Forget the token and the cached profile.
pub fn logout(mut auth: Signal<AuthState>, mut profile: Signal<Option<User>>) {
    auth.write().apply(AuthAction::Logout);
    profile.set(None);
}

fn login_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "Unable to reach the server. Please try again.".to_string(),
        ApiError::NotFound(_) => "Invalid email or password".to_string(),
        other => other.to_string(),
    }
}

/// Clears the session, then calls `on_logout` so the page can navigate away.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let profile = use_profile();

    let onclick = move |_| {
        logout(auth, profile);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_lifecycle() {
        let mut state = AuthState::default();
        assert!(!state.is_authenticated());

        state.apply(AuthAction::LoginStarted);
        assert!(state.login_pending());

        state.apply(AuthAction::LoginSucceeded("tok".to_string()));
        assert_eq!(state.login, RequestStatus::Succeeded);
        assert_eq!(state.token.as_deref(), Some("tok"));
        assert!(state.is_authenticated());

        state.apply(AuthAction::Logout);
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn test_failed_login_clears_token_and_keeps_message() {
        let mut state = AuthState {
            token: Some("old".to_string()),
            ..Default::default()
        };
        state.apply(AuthAction::LoginStarted);
        state.apply(AuthAction::LoginFailed("Invalid email or password".to_string()));
        assert_eq!(state.login, RequestStatus::Failed);
        assert_eq!(state.token, None);
        assert_eq!(state.error.as_deref(), Some("Invalid email or password"));

        state.apply(AuthAction::LoginStarted);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_register_lifecycle() {
        let mut state = AuthState::default();
        state.apply(AuthAction::RegisterStarted);
        assert!(state.register_pending());

        state.apply(AuthAction::RegisterSucceeded("Check your email".to_string()));
        assert_eq!(state.register, RequestStatus::Succeeded);
        assert_eq!(state.notice.as_deref(), Some("Check your email"));
        assert_eq!(state.token, None);

        state.apply(AuthAction::RegisterSucceeded(String::new()));
        assert_eq!(state.notice, None);

        state.apply(AuthAction::RegisterFailed("Email already used".to_string()));
        assert_eq!(state.register, RequestStatus::Failed);
        state.apply(AuthAction::ClearMessages);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_login_messages() {
        assert_eq!(
            login_message(&ApiError::BadRequest("Wrong password".to_string())),
            "Wrong password"
        );
        assert_eq!(
            login_message(&ApiError::NotFound("no user".to_string())),
            "Invalid email or password"
        );
        assert!(login_message(&ApiError::Network("dns".to_string())).contains("reach the server"));
    }
}
