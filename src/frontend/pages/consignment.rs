use crate::frontend::pages::tracking::TrackingForm;
use dioxus::prelude::*;

#[component]
pub fn Consignment() -> Element {
    rsx! {
        div { class: "consignment",
            h1 { "Consignments" }
            p {
                "Consign bars or coins to the vault, or follow one that is already on its way."
            }
            h3 { "Follow a consignment" }
            TrackingForm {}
        }
    }
}
