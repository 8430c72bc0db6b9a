//! # synapse-client
//!
//! Leptos + WASM frontend shell for Synapse, a productivity/wellness app.
//!
//! The interesting part is the session and access-control core: how the
//! bearer token is acquired, persisted, attached to outbound requests, and
//! used to gate navigation. Everything else is presentational composition
//! around it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and logging, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
