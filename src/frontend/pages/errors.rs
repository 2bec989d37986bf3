//! Error pages and fallbacks.

use crate::frontend::app::route::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
fn ErrorPage(code: &'static str, title: &'static str, message: &'static str) -> Element {
    rsx! {
        section { class: "error-page",
            p { class: "error-code", "{code}" }
            h1 { "{title}" }
            p { "{message}" }
            Link { class: "button", to: Route::Landing {}, "Back to GoldVault" }
        }
    }
}

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        ErrorPage {
            code: "404",
            title: "Page not found",
            message: "The page you are looking for does not exist or has moved.",
        }
    }
}

/// Shown in place when the session lacks the role a page needs.
#[component]
pub fn ForbiddenView() -> Element {
    rsx! {
        ErrorPage {
            code: "403",
            title: "Access denied",
            message: "Your account does not have access to this area.",
        }
    }
}

#[component]
pub fn ServerErrorView() -> Element {
    rsx! {
        ErrorPage {
            code: "500",
            title: "Something went wrong",
            message: "We could not complete your request. Please try again shortly.",
        }
    }
}

/// Fallback rendered by the shell's error boundary.
#[component]
pub fn RenderFailure() -> Element {
    rsx! {
        section { class: "error-page",
            h1 { "This page could not be displayed" }
            p { "The rest of GoldVault is still available from the navigation above." }
        }
    }
}
