//! # client
//!
//! Leptos front end for the Lean Quran marketing and enrollment app.
//! Pages, components, and reactive state all sit on top of the pure
//! `enrollment` domain crate; this crate only renders and dispatches.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // Logger already installed; keep going.
    }
    leptos::mount::hydrate_body(app::App);
}
