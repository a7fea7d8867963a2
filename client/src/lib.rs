//! # client
//!
//! Leptos + WASM frontend for the map bounds form.
//!
//! This crate contains the app shell, the input and message components, the
//! form/map state models, and the pure helpers that validate bounds, filter
//! the overlay dataset, and search notes. The `server` crate renders
//! [`app::App`] with the `ssr` feature; the browser bundle hydrates it with
//! the `hydrate` feature.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
