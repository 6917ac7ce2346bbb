//! Novel Console Frontend Entry Point

mod app;
mod chart;
mod commands;
mod components;
mod config;
mod context;
mod detail;
mod dispatch;
mod error;
mod format;
mod logging;
mod models;
mod poller;
mod render;
mod shell;
mod store;
#[cfg(test)]
mod testing;
mod transport;

use app::App;
use config::ConsoleConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = ConsoleConfig::load();
    log::set_max_level(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
