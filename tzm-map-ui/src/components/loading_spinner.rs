//! Loading indicator shown until the map fires `load`.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); z-index: 999; color: #666; pointer-events: none;",
            "Loading map..."
        }
    }
}
