use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Backdrop plus a centered card for the open modal.
/// Clicking the backdrop or the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            id: "modal",
            class: "modal",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                id: "modal-body",
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    id: "closeModal",
                    class: "modal-close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
                {children}
            }
        }
    }
}
