//! Clinic Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logging;
mod markdown;
mod pages;
mod resources;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    logging::init();
    mount_to_body(App);
}
