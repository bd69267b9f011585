//! # flash-running
//!
//! Leptos + WASM frontend for the Flash Running training-plan product.
//!
//! This crate contains pages, components, the auth session store, and the
//! REST client used to talk to the remote plan API. All plan generation,
//! persistence and Strava token exchange happen server-side; this crate only
//! renders and forwards user actions.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("flash-running client starting, api base {}", config::api_base_url());
    leptos::mount::hydrate_body(app::App);
}
