#![allow(warnings)]
//! Estimate Editor Frontend Entry Point

mod app;
mod components;
mod config;
mod fetch;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", e).into());
    }
    log::info!("[APP] Starting, data url = {}", config.data_url);

    mount_to_body(move || view! { <App config=config /> });
}
