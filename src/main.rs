//! Todo View Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod readiness;
mod reconcile;
mod store;
#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    if let Err(e) = console_logger::init(console_logger::parse_level(&config.log_level)) {
        web_sys::console::warn_1(&format!("[app] logger already set: {}", e).into());
    }
    log::info!("[app] starting todo view");
    mount_to_body(move || view! { <App config=config /> });
}
