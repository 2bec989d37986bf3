//! Guard for pages that need a session.

use crate::backend::session::Role;
use crate::frontend::components::common::LoadingIndicator;
use crate::frontend::guards::access::{ProtectedState, SIGN_IN_ROUTE, evaluate_protected};
use crate::frontend::pages::errors::ForbiddenView;
use crate::frontend::services::use_session;
use dioxus::prelude::*;
use dioxus_router::navigator;

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

/// Renders `children` only for a signed-in user holding `role` (any role
/// when `None`). Anonymous visitors are redirected to sign-in; a role
/// mismatch shows the forbidden view in place.
#[component]
pub fn Protected(#[props(!optional)] role: Option<Role>, children: Element) -> Element {
    let session = use_session();

    match evaluate_protected(&session, role) {
        ProtectedState::Loading => rsx! { LoadingIndicator {} },
        ProtectedState::Unauthenticated => {
            navigator().replace(SIGN_IN_ROUTE);
            rsx! { LoadingIndicator {} }
        }
        ProtectedState::Forbidden => rsx! { ForbiddenView {} },
        ProtectedState::Authorized => children,
    }
}
