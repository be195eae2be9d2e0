//! Task List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod store;
mod sync;
mod task_list;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
