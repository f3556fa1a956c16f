use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "404" }
                p { "Nothing lives at /{path}." }
                Link { to: Route::Dashboard {}, "Back to the dashboard" }
            }
        }
    }
}
