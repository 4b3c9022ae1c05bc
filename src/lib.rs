//! GlobeGenius browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! A Leptos single-page application for the flight-deal-alert service:
//! public marketing and auth pages, a user dashboard of flight-price
//! alerts, a premium onboarding wizard, and an admin back-office. The REST
//! backend is an external collaborator reached through `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire up panic/log output and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
