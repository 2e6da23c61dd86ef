//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR pages, the hydrate bundle under
//! `/pkg`, the stylesheet directory under `/assets`, and the popup sign-in
//! routes. Page routes come from the site crate's route list so the server
//! and the browser agree on paths.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use site::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Sign-in and health routes, independent of the Leptos configuration.
pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/auth/{provider}", get(auth::start))
        .route("/auth/{provider}/callback", get(auth::callback))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: SSR pages, static assets and sign-in routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `[workspace.metadata.leptos]` section and no `LEPTOS_*` environment).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let site_config = state.config.site.clone();

    let routes = generate_route_list({
        let config = site_config.clone();
        move || view! { <App config=config.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), site_config.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let assets_dir = state.config.assets_dir.clone();

    Ok(auth_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
