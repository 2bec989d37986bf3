use crate::frontend::app::route::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-column",
                h4 { "GoldVault" }
                p { "Allocated, insured gold storage." }
            }
            div { class: "footer-column",
                h4 { "Services" }
                ul {
                    li { Link { to: Route::Home {}, "How it works" } }
                    li { Link { to: Route::Track {}, "Track a consignment" } }
                }
            }
            div { class: "footer-column",
                h4 { "Account" }
                ul {
                    li { Link { to: Route::Auth {}, "Sign in" } }
                    li { Link { to: Route::Dashboard {}, "Dashboard" } }
                }
            }
        }
    }
}
