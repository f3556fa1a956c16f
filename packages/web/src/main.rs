use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::AppConfig;
use ui::{AuthProvider, LanguageProvider};
use views::{
    AdminCampaign, AdminCampaigns, AdminLayout, AdminUser, AdminUsers, Analytics, Campaigns,
    Confirm, Dashboard, DashboardLayout, EditCampaign, Login, NewCampaign, NewPassword, NotFound,
    PaymentReturn, Register, ResetPassword, Settings, VerifyEmail, Wallet,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/verify-email")]
    VerifyEmail {},
    #[route("/confirm/:token")]
    Confirm { token: String },
    #[route("/reset-password")]
    ResetPassword {},
    #[route("/new-password/:token")]
    NewPassword { token: String },
    #[nest("/dashboard")]
        #[layout(DashboardLayout)]
            #[route("/")]
            Dashboard {},
            #[route("/analytics")]
            Analytics {},
            #[route("/campaigns")]
            Campaigns {},
            #[route("/campaigns/new")]
            NewCampaign {},
            #[route("/campaigns/:id/edit")]
            EditCampaign { id: String },
            #[route("/wallet")]
            Wallet {},
            #[route("/payment-return?:payment_id")]
            PaymentReturn { payment_id: String },
            #[route("/settings")]
            Settings {},
            #[nest("/admin")]
                #[layout(AdminLayout)]
                    #[route("/users")]
                    AdminUsers {},
                    #[route("/users/:id")]
                    AdminUser { id: String },
                    #[route("/campaigns")]
                    AdminCampaigns {},
                    #[route("/campaigns/:id")]
                    AdminCampaign { id: String },
                #[end_layout]
            #[end_nest]
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
    dioxus::launch(App);
}

/// Embedded `addesk.toml`, with the API base URL optionally replaced at
/// build time through `ADDESK_API_URL`.
fn load_config() -> AppConfig {
    let config = match AppConfig::from_toml(include_str!("../addesk.toml")) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}", AppConfig::filename(), e);
            AppConfig::default()
        }
    };
    config.with_api_override(option_env!("ADDESK_API_URL"))
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let default_language = config.ui.default_language;

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config,
            LanguageProvider {
                default_language,
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the dashboard; the gate sends anonymous visitors on to
/// the login screen.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_toml(include_str!("../addesk.toml")).unwrap();
        assert_eq!(config.campaigns.title_min_len, 3);
        assert_eq!(config.campaigns.title_max_len, 40);
    }

    #[test]
    fn test_routes_render_paths() {
        assert_eq!(
            Route::EditCampaign { id: "c1".to_string() }.to_string(),
            "/dashboard/campaigns/c1/edit"
        );
        assert_eq!(
            Route::AdminUser { id: "u1".to_string() }.to_string(),
            "/dashboard/admin/users/u1"
        );
    }
}
