//! Pagewright - landing pages from a declarative JSON spec
//!
//! A page spec is validated into a typed model, dispatched section by
//! section to pure renderers, and shown either as Leptos views on the
//! preview page or as a standalone HTML document from the server API.

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
