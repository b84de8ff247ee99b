//! # dashboard-menu
//!
//! Leptos + WASM header menu for the application dashboard: administration
//! links scoped to the selected cluster and namespace, a persisted light/dark
//! theme toggle, and a logout action.
//!
//! Browser access (storage, document attributes, document listeners) is
//! compiled only with the `hydrate` feature and sits behind small ports in
//! `util`, so state transitions are tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    log::info!("hydrating dashboard menu");
    leptos::mount::hydrate_body(app::App);
}
