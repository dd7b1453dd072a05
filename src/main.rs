//! Job Lander Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod dashboard;
mod error;
mod logging;
mod models;
mod navigation;
mod pages;
mod query;
mod routes;
mod session;
mod storage;
mod store;
mod toast;
mod todos;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // warn until the configured level is known, so bad settings still show up
    logging::init(log::LevelFilter::Warn);
    let config = AppConfig::from_env();
    log::set_max_level(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
