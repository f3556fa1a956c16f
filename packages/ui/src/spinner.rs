use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

/// Loading indicator shown while a request is in flight.
#[component]
pub fn Spinner(#[props(default)] label: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            span {
                class: "spinner-icon",
                Icon { icon: FaSpinner, width: 18, height: 18 }
            }
            if !label.is_empty() {
                span { class: "spinner-label", "{label}" }
            }
        }
    }
}
