//! # site
//!
//! Leptos + WASM frontend for the AI for Good Initiative website.
//!
//! This crate contains the page routes, the session-aware chrome, the
//! sign-in/sign-up controller, form-relay submissions, and the network
//! adapters for the hosted identity provider and form relay. The server
//! crate renders it with SSR; the browser hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::SiteConfig;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }

    let config = SiteConfig::from_document().unwrap_or_default();
    leptos::mount::hydrate_body(move || view! { <App config=config/> });
}
