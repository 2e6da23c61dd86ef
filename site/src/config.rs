//! Public site configuration shared between the server and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server loads these values from the environment, renders them into the
//! SSR shell as an inert JSON `<script>` element, and the hydrated client
//! reads them back. Only values that are safe to publish belong here; OAuth
//! client secrets stay in the server's own config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// DOM id of the `<script type="application/json">` element carrying config.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_VOLUNTEER_FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfAWULjYZYB_W6Vh_SZcKnMmGUlCGJrg47mYI_tzIjHHWfWaQ/viewform?usp=header";
pub const DEFAULT_IDEA_FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSf2NTBzsvb-Cl1PRTcqyRQMfs1PSgm7J5fZsMH6_WILfXV7Ig/viewform?usp=header";
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/aiforgoodinitiative";

/// Identity provider settings the browser needs.
///
/// Only the REST API key: the popup flow runs through this site's own
/// `/auth/*` routes, so the provider's hosted auth domain is never contacted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Browser API key; public by design of the provider.
    pub api_key: String,
}

/// Form relay endpoint identifiers, one per logical channel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub partner_form_id: String,
    pub contact_form_id: String,
}

/// Out-of-band links rendered on the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLinks {
    pub volunteer_form_url: String,
    pub idea_form_url: String,
    pub github_url: String,
}

impl Default for ExternalLinks {
    fn default() -> Self {
        Self {
            volunteer_form_url: DEFAULT_VOLUNTEER_FORM_URL.to_owned(),
            idea_form_url: DEFAULT_IDEA_FORM_URL.to_owned(),
            github_url: DEFAULT_GITHUB_URL.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub identity: IdentityConfig,
    pub relay: RelayConfig,
    #[serde(default)]
    pub links: ExternalLinks,
}

impl SiteConfig {
    /// Serialize for embedding inside a `<script>` element.
    ///
    /// `<`, `>` and `&` are emitted as unicode escapes so a value can never
    /// close the surrounding element.
    #[must_use]
    pub fn to_embedded_json(&self) -> String {
        let raw = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned());
        escape_script_json(&raw)
    }

    /// Parse the embedded JSON produced by [`SiteConfig::to_embedded_json`].
    ///
    /// # Errors
    ///
    /// Returns the serde error when the payload is not a valid config object.
    pub fn from_embedded_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the config embedded by the SSR shell. Browser only.
    pub fn from_document() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window()?.document()?;
            let raw = document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
            match Self::from_embedded_json(&raw) {
                Ok(config) => Some(config),
                Err(e) => {
                    leptos::logging::warn!("site config unreadable: {e}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Escape `<`, `>` and `&` in serialized JSON destined for an HTML `<script>`.
pub fn escape_script_json(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            other => out.push(other),
        }
    }
    out
}
