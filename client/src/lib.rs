//! # client
//!
//! Leptos + WASM frontend for the realtime card table. Mirrors the
//! server's privacy-filtered room snapshot, hosts the imperative
//! `table` engine for hit-testing and rendering, and turns pointer and
//! keyboard input into action intents on the websocket.
//!
//! This crate contains the app shell, components, reactive state, the
//! websocket channel, and room-code utilities. Browser-only code is
//! gated behind the `hydrate` feature so the pure logic tests run
//! natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
