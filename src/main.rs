//! # initiative
//!
//! Axum server for the AI for Good Initiative website. Renders the `site`
//! crate with Leptos SSR, serves the hydrate bundle and stylesheet, and runs
//! the OAuth popup flow that backs federated sign-in.

mod config;
mod routes;
mod services;
mod state;

#[cfg(test)]
mod test_support;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;
    if config.site.identity.api_key.is_empty() {
        tracing::warn!("FIREBASE_API_KEY not set; sign-in will fail");
    }
    for kind in site::net::identity::ProviderKind::ALL {
        if config.oauth_client(kind).is_none() {
            tracing::warn!(provider = %kind, "oauth client not configured; provider disabled");
        }
    }

    let state = state::AppState::new(config);
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "initiative listening");
    axum::serve(listener, app).await.expect("server failed");
}
