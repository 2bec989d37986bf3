//! Marketing landing page.

use crate::frontend::app::route::Route;
use crate::frontend::components::common::{Carousel, Slide};
use dioxus::prelude::*;
use dioxus_router::components::Link;

const SLIDES: [Slide; 3] = [
    Slide {
        title: "Own physical gold, stored for you",
        body: "Every gram you buy is allocated to you and held in insured vaults.",
    },
    Slide {
        title: "Track every consignment",
        body: "Follow deliveries into and out of the vault with a single tracking number.",
    },
    Slide {
        title: "Your holdings at a glance",
        body: "See balances, storage fees and statements from your dashboard.",
    },
];

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "landing",
            section { class: "hero",
                h1 { "Gold storage made simple" }
                p { "Buy, store and move physical gold with full transparency." }
                div { class: "hero-actions",
                    Link { class: "button", to: Route::Auth {}, "Sign in" }
                    Link { class: "button button-secondary", to: Route::Home {}, "How it works" }
                }
            }

            Carousel { slides: SLIDES.to_vec() }
        }
    }
}
