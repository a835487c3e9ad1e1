//! # client
//!
//! Leptos + WASM front-end for PrestaBanco mortgage applications.
//!
//! Pages collect applicant input, validate it with the shared `loans` crate
//! and call the backend REST API through `net::api`. All credit decisions and
//! computations stay on the backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
