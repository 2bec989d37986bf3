use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "loading-indicator", role: "status",
            div { class: "spinner" }
        }
    }
}
