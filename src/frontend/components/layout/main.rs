use crate::frontend::app::route::Route;
use crate::frontend::components::layout::{Footer, Navigation};
use crate::frontend::guards::{AccessPolicy, Protected, Public};
use crate::frontend::pages::errors::RenderFailure;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, use_route};


/// Page shell shared by every route.
///
/// The matched page renders behind the guard its route's policy names and
/// inside an error boundary, so a failing page leaves navigation and footer
/// usable.
#[component]
pub fn Layout() -> Element {
    let route = use_route::<Route>();
    let policy = route.access_policy();

    rsx! {
        div { class: "shell",
            Navigation {}

            main { class: "content",
                PageBoundary { page: route.to_string(), {guarded_outlet(policy)} }
            }

            Footer {}
        }
    }
}

/// Error boundary for the page identified by `page`.
///
/// The boundary is keyed by `page`, so a new page starts with a fresh
/// boundary instead of the fallback a previous page left behind.
#[component]
pub fn PageBoundary(page: String, children: Element) -> Element {
    rsx! {
        for page in std::iter::once(page) {
            ErrorBoundary {
                key: "{page}",
                handle_error: |_: ErrorContext| {
                    tracing::error!("Page failed to render");
                    rsx! { RenderFailure {} }
                },
                {children.clone()}
            }
        }
    }
}

fn guarded_outlet(policy: AccessPolicy) -> Element {
    match policy {
        AccessPolicy::PublicAlways => rsx! { Outlet::<Route> {} },
        AccessPolicy::PublicRedirectIfAuthenticated => rsx! {
            Public { Outlet::<Route> {} }
        },
        AccessPolicy::Protected(role) => rsx! {
            Protected { role, Outlet::<Route> {} }
        },
    }
}
