mod backend;
mod frontend;

use crate::backend::utils::config::AppConfig;
use crate::frontend::app::App;
use dioxus::LaunchBuilder;
use tracing::Level;

fn main() {
    init_logging();

    let config = AppConfig::load();
    tracing::info!(
        "Starting GoldVault (session endpoint: {}{})",
        config.api.base_url,
        config.api.session_path
    );

    let builder = LaunchBuilder::new().with_context(config);

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop_config());

    builder.launch(App);
}

fn init_logging() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
}

#[cfg(feature = "desktop")]
fn desktop_config() -> dioxus_desktop::Config {
    use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

    let size = LogicalSize::new(1280.0, 832.0);

    Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("GoldVault")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(960.0, 640.0)),
        )
        .with_menu(None)
}
