use crate::backend::session::Role;
use crate::frontend::app::route::Route;
use crate::frontend::services::{SessionHandle, use_session};
use dioxus::prelude::*;
use dioxus_router::{components::Link, use_route};

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Top-level sections highlighted in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tracking,
    Dashboard,
    Consignment,
    Admin,
    Other,
}

impl Section {
    pub const fn of(route: &Route) -> Self {
        match route {
            Route::Track {} | Route::Tracking {} | Route::TrackingDetail { .. } => Self::Tracking,
            Route::Dashboard {} => Self::Dashboard,
            Route::Consignment {} => Self::Consignment,
            Route::Admin {} => Self::Admin,
            _ => Self::Other,
        }
    }
}

fn item_class(active: Section, item: Section) -> &'static str {
    if active == item { "nav-item active" } else { "nav-item" }
}

#[component]
pub fn Navigation() -> Element {
    let route = use_route::<Route>();
    let session = use_session();
    let handle = use_context::<SessionHandle>();
    let active = Section::of(&route);
    let is_admin = session.role() == Some(Role::Admin);

    rsx! {
        nav { class: "navigation",
            Link { class: "nav-brand", to: Route::Landing {}, "GoldVault" }

            ul { class: "nav-items",
                li { class: item_class(active, Section::Tracking),
                    Link { to: Route::Track {}, "Track a consignment" }
                }

                if session.is_authenticated() {
                    li { class: item_class(active, Section::Dashboard),
                        Link { to: Route::Dashboard {}, "Dashboard" }
                    }
                    li { class: item_class(active, Section::Consignment),
                        Link { to: Route::Consignment {}, "Consignments" }
                    }
                    if is_admin {
                        li { class: item_class(active, Section::Admin),
                            Link { to: Route::Admin {}, "Admin" }
                        }
                    }
                    li { class: "nav-item",
                        button {
                            class: "button button-secondary",
                            onclick: move |_| {
                                let handle = handle.clone();
                                spawn(async move {
                                    handle.logout().await;
                                });
                            },
                            "Sign out"
                        }
                    }
                } else if !session.is_loading {
                    li { class: "nav-item",
                        Link { class: "button", to: Route::Auth {}, "Sign in" }
                    }
                }
            }
        }
    }
}
