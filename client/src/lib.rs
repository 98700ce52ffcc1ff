//! # client
//!
//! Leptos + WASM frontend for workspace parameter settings.
//!
//! This crate contains the pages, components, page state, and REST helpers.
//! The form model itself lives in the `params` crate and is shared with the
//! server, which validates submitted builds with the same schema.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
