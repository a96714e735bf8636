//! # client
//!
//! Leptos + WASM frontend for the research-brief service. Users paste
//! article links, follow generation progress, and read the resulting
//! briefs, source comparisons, and backend health.
//!
//! This crate contains the routed app, pages, components, view state, the
//! HTTP API client, and pure view helpers. The `hydrate` feature builds the
//! browser bundle; `ssr` lets the host binary render the same routes.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic panel, route `log` to the
/// console, and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::panic_panel::install();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
