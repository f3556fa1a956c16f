use dioxus::prelude::*;

/// Inline error message under a form or at the top of a page.
#[component]
pub fn ErrorText(message: String) -> Element {
    rsx! {
        p {
            class: "notice notice-error",
            role: "alert",
            "{message}"
        }
    }
}

#[component]
pub fn SuccessText(message: String) -> Element {
    rsx! {
        p {
            class: "notice notice-success",
            "{message}"
        }
    }
}
