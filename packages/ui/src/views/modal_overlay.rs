use dioxus::prelude::*;

/// Full-screen backdrop that centers a dialog card.
/// Clicking the backdrop (not the card) triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default, into)] title: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                if !title.is_empty() {
                    div {
                        class: "modal-header",
                        h2 { "{title}" }
                        button {
                            class: "modal-close",
                            r#type: "button",
                            aria_label: "Close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                {children}
            }
        }
    }
}
