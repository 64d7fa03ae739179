//! # hopin-client
//!
//! Leptos + WASM frontend for the Hop In ride-sharing app.
//!
//! This crate contains pages, components, application state, the login flow,
//! and the HTTP helpers that talk to the authentication API. The `hydrate`
//! feature builds the browser bundle; `ssr` builds the server-render side
//! consumed by `hopin-server`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
