//! Vestibule - Account Portal
//!
//! The sign-in and registration frontend for the Vestibule platform, built
//! with Leptos and WebAssembly. Credential checks happen in an external auth
//! service; this crate renders the forms and drives the submission flow.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
