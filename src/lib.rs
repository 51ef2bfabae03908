//! # page-chrome
//!
//! Leptos + WASM page chrome for server-rendered web front-ends: a persisted
//! dark/light theme toggle, a full-page loading overlay that reacts to
//! connectivity, a transient notice banner, and a coordinator that ties them
//! to page load and in-app link navigation.
//!
//! State machines (`state`, `coordinator`) are plain data and test natively.
//! The `hydrate` feature adds the browser runtime, which mounts the Leptos
//! components, wires DOM listeners and exposes a `ChromeApi` to page scripts.

pub mod app;
pub mod components;
pub mod config;
pub mod coordinator;
pub mod runtime;
pub mod state;
pub mod util;

/// WASM entry point: install logging and boot the chrome.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("page-chrome: logger already installed");
    }
    runtime::start();
}
