//! Guard for pages that signed-in users skip.

use crate::frontend::components::common::LoadingIndicator;
use crate::frontend::guards::access::{PublicState, evaluate_public};
use crate::frontend::services::use_session;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[cfg(test)]
#[path = "public_test.rs"]
mod public_test;

/// Renders `children` for anonymous visitors and sends signed-in users to
/// their landing route.
#[component]
pub fn Public(children: Element) -> Element {
    let session = use_session();

    match evaluate_public(&session) {
        PublicState::Loading => rsx! { LoadingIndicator {} },
        PublicState::Authenticated(landing) => {
            tracing::debug!("Already signed in, redirecting to {landing}");
            navigator().replace(landing);
            rsx! {}
        }
        PublicState::Anonymous => children,
    }
}
