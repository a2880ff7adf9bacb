//! FastFun RC Marketing Site
//!
//! Leptos pages for the catalog, company story and the RFQ funnel. The
//! server binary renders them; the `hydrate` build makes the forms, the
//! product filter and the nav highlighter interactive in the browser.

pub mod app;
pub mod browser;
pub mod components;
pub mod lead;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
