use dioxus::prelude::*;

use crate::auth::use_profile;
use crate::i18n::{t, use_language, Key};
use crate::{LanguageSelect, LogoutButton};

/// Top bar of the dashboard. `children` are the navigation links, which the
/// app supplies since it owns the routes.
#[component]
pub fn Navbar(brand: String, on_logout: EventHandler<()>, children: Element) -> Element {
    let profile = use_profile();
    let lang = use_language();
    let user = profile.read().clone();

    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "{brand}" }
            div {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-user",
                LanguageSelect {}
                if let Some(user) = user {
                    span {
                        class: "navbar-name",
                        title: "{user.email}",
                        "{user.display_name()}"
                    }
                }
                LogoutButton {
                    label: t(lang(), Key::Logout).to_string(),
                    class: "btn btn-outline btn-small",
                    on_logout: move |_| on_logout.call(()),
                }
            }
        }
    }
}
