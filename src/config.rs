//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Everything is read through a lookup closure so tests can feed a map
//! instead of mutating the process environment. The public subset becomes a
//! [`SiteConfig`] that the SSR shell embeds for the browser; OAuth client
//! secrets never leave this struct.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use site::config::{ExternalLinks, IdentityConfig, RelayConfig, SiteConfig};
use site::net::identity::ProviderKind;

use crate::services::oauth::OAuthClient;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("PUBLIC_ORIGIN must be an http(s) origin without a path: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Scheme, host and port the site is served from, without trailing `/`.
    pub public_origin: String,
    pub assets_dir: PathBuf,
    pub cookie_secure: bool,
    pub site: SiteConfig,
    pub google: Option<OAuthClient>,
    pub github: Option<OAuthClient>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PUBLIC_ORIGIN`: default `http://localhost:{PORT}`
    /// - `ASSETS_DIR`: default `assets`
    /// - `COOKIE_SECURE`: defaults to whether the origin is `https`
    /// - `FIREBASE_API_KEY`
    /// - `PARTNER_FORM_ID`, `CONTACT_FORM_ID`
    /// - `VOLUNTEER_FORM_URL`, `IDEA_FORM_URL`, `GITHUB_URL`
    /// - `GOOGLE_CLIENT_ID` + `GOOGLE_CLIENT_SECRET`, `GITHUB_CLIENT_ID` +
    ///   `GITHUB_CLIENT_SECRET`: a provider is disabled unless both are set
    ///
    /// # Errors
    ///
    /// Returns an error when `PORT` is not a port number or `PUBLIC_ORIGIN`
    /// is not a bare http(s) origin.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let public_origin = var("PUBLIC_ORIGIN")
            .map(|raw| raw.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| format!("http://localhost:{port}"));
        if !is_bare_origin(&public_origin) {
            return Err(ConfigError::InvalidOrigin(public_origin));
        }

        let cookie_secure = var("COOKIE_SECURE")
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or_else(|| public_origin.starts_with("https://"));

        let defaults = ExternalLinks::default();
        let site = SiteConfig {
            identity: IdentityConfig {
                api_key: var("FIREBASE_API_KEY").unwrap_or_default(),
            },
            relay: RelayConfig {
                partner_form_id: var("PARTNER_FORM_ID").unwrap_or_default(),
                contact_form_id: var("CONTACT_FORM_ID").unwrap_or_default(),
            },
            links: ExternalLinks {
                volunteer_form_url: var("VOLUNTEER_FORM_URL").unwrap_or(defaults.volunteer_form_url),
                idea_form_url: var("IDEA_FORM_URL").unwrap_or(defaults.idea_form_url),
                github_url: var("GITHUB_URL").unwrap_or(defaults.github_url),
            },
        };

        let oauth_pair = |id_key: &str, secret_key: &str| {
            Some(OAuthClient { client_id: var(id_key)?, client_secret: var(secret_key)? })
        };

        Ok(Self {
            port,
            public_origin,
            assets_dir: var("ASSETS_DIR").map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from),
            cookie_secure,
            site,
            google: oauth_pair("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"),
            github: oauth_pair("GITHUB_CLIENT_ID", "GITHUB_CLIENT_SECRET"),
        })
    }

    /// OAuth client registered for `kind`, if configured.
    #[must_use]
    pub fn oauth_client(&self, kind: ProviderKind) -> Option<&OAuthClient> {
        match kind {
            ProviderKind::Google => self.google.as_ref(),
            ProviderKind::GitHub => self.github.as_ref(),
        }
    }

    /// Absolute callback URL registered with the OAuth provider.
    #[must_use]
    pub fn callback_url(&self, kind: ProviderKind) -> String {
        format!("{}/auth/{}/callback", self.public_origin, kind.slug())
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn is_bare_origin(origin: &str) -> bool {
    let rest = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty() && !host.contains('/'))
}
