//! Administration area.

use crate::frontend::services::use_session;
use dioxus::prelude::*;

#[component]
pub fn Admin() -> Element {
    let session = use_session();
    let email = session
        .user
        .as_ref()
        .and_then(|user| user.email.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "admin",
            h1 { "Administration" }
            p { "Signed in as {email}" }
            ul {
                li { "Review pending consignments" }
                li { "Reconcile vault inventory" }
                li { "Manage customer accounts" }
            }
        }
    }
}
