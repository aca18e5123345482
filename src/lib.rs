//! # data-catalog-client
//!
//! Leptos + WASM frontend for the team data catalog service.
//!
//! This crate contains pages, components, application state, the REST
//! DTOs, and the authenticated HTTP client. The backend is an external
//! service reached over its `/api/v1` REST contract; everything here is
//! view and state-synchronization logic.
//!
//! Browser-only behavior (fetch, localStorage, mounting) lives behind
//! the `hydrate` feature with inert native stubs, so the whole test
//! suite runs under plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the application into `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
