//! Application root.

use crate::backend::utils::config::AppConfig;
use crate::backend::utils::css::ResourceLoader;
use crate::frontend::app::route::Route;
use crate::frontend::services::context::SessionHandle;
use dioxus::prelude::*;
use dioxus_router::Router;

#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let revision = use_signal(|| 0_u64);
    use_context_provider(|| SessionHandle::new(&config, revision));

    rsx! {
        style {
            dangerous_inner_html: ResourceLoader::combine_css(&["base", "layout", "carousel", "forms"])
        }
        Router::<Route> {}
    }
}
