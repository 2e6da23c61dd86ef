//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config, one pooled HTTP client for every upstream call,
//! and the upstream base URLs so tests can point the flow at local stubs.

use std::sync::Arc;

use site::net::firebase::IDENTITY_TOOLKIT_BASE;
use site::net::identity::ProviderKind;

use crate::config::ServerConfig;
use crate::services::oauth::default_token_url;

/// Upstream endpoints the sign-in flow talks to.
#[derive(Debug, Clone)]
pub struct Upstream {
    pub identity_toolkit_base: String,
    pub google_token_url: String,
    pub github_token_url: String,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            identity_toolkit_base: IDENTITY_TOOLKIT_BASE.to_owned(),
            google_token_url: default_token_url(ProviderKind::Google).to_owned(),
            github_token_url: default_token_url(ProviderKind::GitHub).to_owned(),
        }
    }
}

impl Upstream {
    #[must_use]
    pub fn token_url(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::Google => &self.google_token_url,
            ProviderKind::GitHub => &self.github_token_url,
        }
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
    pub upstream: Arc<Upstream>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_upstream(config, Upstream::default())
    }

    #[must_use]
    pub fn with_upstream(config: ServerConfig, upstream: Upstream) -> Self {
        Self { config: Arc::new(config), http: reqwest::Client::new(), upstream: Arc::new(upstream) }
    }
}
