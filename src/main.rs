//! GramSetu Frontend Entry Point

mod app;
mod auth;
mod chain;
mod components;
mod filters;
mod models;
mod money;
mod records;
mod routes;
mod seed;
mod stats;
mod storage;
mod store;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("[boot] starting GramSetu UI");
    leptos::mount::mount_to_body(App);
}
