//! Posts Browser Frontend Entry Point

mod app;
mod components;
mod logger;
mod page_config;
mod store;

use app::App;
use leptos::prelude::*;
use posts_view::Config;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match page_config::read_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    logger::init(config.level_filter());
    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
