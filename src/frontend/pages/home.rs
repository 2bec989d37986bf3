use crate::frontend::app::route::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home",
            h1 { "How GoldVault works" }
            ol {
                li { "Open an account and verify your identity." }
                li { "Buy gold or consign your own bars and coins to the vault." }
                li { "Follow each consignment until it is booked into storage." }
                li { "Review holdings and statements whenever you like." }
            }
            p {
                Link { class: "button", to: Route::Auth {}, "Get started" }
            }
        }
    }
}
