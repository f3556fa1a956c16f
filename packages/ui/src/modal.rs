use dioxus::prelude::*;

/// Dimmed backdrop with a centered card; a click on the backdrop (not the
/// card) calls `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no confirmation for destructive actions.
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                p { "{message}" }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                }
            }
        }
    }
}
