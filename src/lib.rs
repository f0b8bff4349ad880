//! Trio Landing - scroll-animated product landing page
//!
//! Server-rendered with Leptos and hydrated in the browser, presenting three
//! products with parallax sections, reveal-on-view animations and a
//! reading-progress bar.

#![recursion_limit = "512"]

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
