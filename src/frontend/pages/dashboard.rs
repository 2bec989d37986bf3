//! Signed-in dashboard.

use crate::frontend::app::route::Route;
use crate::frontend::services::use_session;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let name = session
        .user
        .as_ref()
        .map_or("Investor", |user| user.display_name())
        .to_string();

    rsx! {
        div { class: "dashboard",
            h1 { "Welcome back, {name}" }
            div { class: "dashboard-cards",
                div { class: "dashboard-card",
                    h3 { "Consignments" }
                    p { "Send metal to the vault or request a withdrawal." }
                    Link { to: Route::Consignment {}, "Open consignments" }
                }
                div { class: "dashboard-card",
                    h3 { "Tracking" }
                    p { "Follow a delivery with its tracking number." }
                    Link { to: Route::Track {}, "Track a consignment" }
                }
            }
        }
    }
}
