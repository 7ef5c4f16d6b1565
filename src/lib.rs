//! # internship-portal
//!
//! Leptos + WASM frontend for the PM Internship Portal. Candidates sign in,
//! fetch internship recommendations, track applications and confirm their
//! allotment; admins run the allocation and watch headline numbers.
//!
//! The session store and route guard are plain Rust and run natively under
//! `cargo test`. Browser bindings (`localStorage`, timers, the mount point)
//! are behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
