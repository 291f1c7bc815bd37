//! # client
//!
//! Leptos + WASM frontend for the property-management console.
//!
//! This crate contains pages, components, application state, and the
//! browser-side REST plumbing. The object hierarchy model and the tree
//! navigator's state machine live in the `hierarchy` crate; this crate binds
//! them to signals and the router.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
