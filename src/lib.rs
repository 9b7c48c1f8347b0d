//! # larder-admin
//!
//! Leptos + WASM admin console for the Larder meal-planning backend.
//!
//! This crate contains pages, components, application state, network types,
//! and the schema-driven form engine. Forms are declared server-side and
//! fetched as [`form::schema::FormSchema`] documents; the engine renders,
//! validates, and submits them without per-entity form code.

pub mod app;
pub mod components;
pub mod form;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
