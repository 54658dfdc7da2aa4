//! Complaint Desk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controllers;
mod error;
mod models;
mod pages;
mod render;
mod routes;
mod session;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("logger setup failed: {}", e).into());
    }
    mount_to_body(App);
}
