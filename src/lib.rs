#![allow(non_snake_case)]

pub mod api;
pub mod bindings;
pub mod catalog;
pub mod components;
pub mod config;
pub mod content;
pub mod services;
pub mod utils;

mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Readable panics in the browser console
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Starting Bookhouse frontend");

    // Remove the static loading placeholder the host page ships with
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(loader) = document.get_element_by_id("app-loading") {
                loader.remove();
            }
        }
    }

    leptos::mount::mount_to_body(app::App);
}
