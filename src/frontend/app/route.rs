//! Application routing table.

use crate::backend::session::Role;
use crate::frontend::components::layout::Layout;
use crate::frontend::guards::AccessPolicy;
use crate::frontend::pages::{
    admin::Admin,
    auth::Auth,
    consignment::Consignment,
    dashboard::Dashboard,
    errors::{ForbiddenView, NotFoundView, ServerErrorView},
    home::Home,
    landing::Landing,
    tracking::TrackingPage,
};
use dioxus::prelude::*;
use dioxus_router::Routable;

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

#[component]
pub fn Track() -> Element {
    rsx! { TrackingPage { id: None } }
}

#[component]
pub fn Tracking() -> Element {
    rsx! { TrackingPage { id: None } }
}

#[component]
pub fn TrackingDetail(id: String) -> Element {
    rsx! { TrackingPage { id: Some(id) } }
}

#[component]
pub fn Error404() -> Element {
    rsx! { NotFoundView {} }
}

#[component]
pub fn Error403() -> Element {
    rsx! { ForbiddenView {} }
}

#[component]
pub fn Error500() -> Element {
    rsx! { ServerErrorView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));
    rsx! { NotFoundView {} }
}

/// Every page of the client. The shell layout wraps each one in the guard
/// named by [`Route::access_policy`].
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        /// Marketing landing page.
        #[route("/")]
        Landing {},
        /// Sign-in page.
        #[route("/auth")]
        Auth {},
        #[route("/home")]
        Home {},
        /// Consignment tracking, with and without a tracking number.
        #[route("/track")]
        Track {},
        #[route("/tracking")]
        Tracking {},
        #[route("/tracking/:id")]
        TrackingDetail { id: String },
        #[route("/dashboard")]
        Dashboard {},
        #[route("/consignment")]
        Consignment {},
        /// Administration area, admins only.
        #[route("/admin")]
        Admin {},
        #[route("/404")]
        Error404 {},
        #[route("/403")]
        Error403 {},
        #[route("/500")]
        Error500 {},
        /// Anything no other route matched.
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    pub const fn access_policy(&self) -> AccessPolicy {
        match self {
            Self::Landing {} | Self::Auth {} | Self::Home {} => {
                AccessPolicy::PublicRedirectIfAuthenticated
            }
            Self::Dashboard {} | Self::Consignment {} => AccessPolicy::Protected(None),
            Self::Admin {} => AccessPolicy::Protected(Some(Role::Admin)),
            Self::Track {}
            | Self::Tracking {}
            | Self::TrackingDetail { .. }
            | Self::Error404 {}
            | Self::Error403 {}
            | Self::Error500 {}
            | Self::NotFound { .. } => AccessPolicy::PublicAlways,
        }
    }
}
