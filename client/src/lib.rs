//! Mission Control page shell hosting the fleet overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `fleet` crate owns the overlay itself. This crate is the mount
//! boundary: it provides the container element, UI state for showing and
//! hiding the fleet, and the browser entry point.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console_log init failed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
