use dioxus::prelude::*;
use ui::{admin_allowed, t, use_language, use_profile, AdminOnly, GateRedirect, Key, Navbar, SessionGate};

use crate::Route;

/// Shell of every `/dashboard` page: the session gate, the top bar and the
/// routed content.
#[component]
pub fn DashboardLayout() -> Element {
    let nav = use_navigator();
    let lang = use_language();
    let profile = use_profile();
    let is_admin = admin_allowed(profile.read().as_ref());

    let on_redirect = move |redirect: GateRedirect| {
        tracing::info!("Dashboard gate redirect: {:?}", redirect);
        match redirect {
            GateRedirect::Login => nav.replace(Route::Login {}),
            GateRedirect::VerifyEmail => nav.replace(Route::VerifyEmail {}),
        };
    };

    rsx! {
        SessionGate {
            on_redirect,
            Navbar {
                brand: "AdDesk",
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
                Link { to: Route::Dashboard {}, active_class: "active", "{t(lang(), Key::Dashboard)}" }
                Link { to: Route::Analytics {}, active_class: "active", "{t(lang(), Key::Analytics)}" }
                Link { to: Route::Campaigns {}, active_class: "active", "{t(lang(), Key::Campaigns)}" }
                Link { to: Route::Wallet {}, active_class: "active", "{t(lang(), Key::Wallet)}" }
                Link { to: Route::Settings {}, active_class: "active", "{t(lang(), Key::Settings)}" }
                if is_admin {
                    Link { to: Route::AdminUsers {}, active_class: "active", "{t(lang(), Key::Users)}" }
                    Link { to: Route::AdminCampaigns {}, active_class: "active", "{t(lang(), Key::AllCampaigns)}" }
                }
            }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        }
    }
}

/// Back-office pages are only rendered for admin accounts.
#[component]
pub fn AdminLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        AdminOnly {
            on_back: move |_| {
                nav.push(Route::Dashboard {});
            },
            Outlet::<Route> {}
        }
    }
}
