//! Form relay contract and the Formspree adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The partner inquiry and contact forms have no backend of their own; they
//! post to a hosted relay which emails the submission on. Each logical form
//! is a separate relay channel with its own form id from configuration.
//!
//! ERROR HANDLING
//! ==============
//! A rejected submission comes back as `{"errors":[{"field"?, "message"}]}`.
//! Field-scoped entries are rendered next to their input, the rest as a
//! banner. Transport failures are a single general error. Nothing retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::RelayConfig;

pub const FORMSPREE_BASE: &str = "https://formspree.io/f";

/// Logical relay destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayChannel {
    PartnerInquiry,
    Contact,
}

impl RelayChannel {
    pub fn form_id(self, config: &RelayConfig) -> &str {
        match self {
            Self::PartnerInquiry => &config.partner_form_id,
            Self::Contact => &config.contact_form_id,
        }
    }
}

/// A relay error scoped to one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Why a submission was not accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.summary())]
pub struct RelayFailure {
    pub field_errors: Vec<FieldError>,
    pub general: Vec<String>,
}

impl RelayFailure {
    pub fn general(message: impl Into<String>) -> Self {
        Self { field_errors: Vec::new(), general: vec![message.into()] }
    }

    pub fn fields(field_errors: Vec<FieldError>) -> Self {
        Self { field_errors, general: Vec::new() }
    }

    /// First error message for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.field_errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    /// One-line description for logs and banners.
    pub fn summary(&self) -> String {
        if !self.general.is_empty() {
            return self.general.join("; ");
        }
        if self.field_errors.is_empty() {
            return "Submission failed".to_owned();
        }
        self.field_errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Contract of the hosted form relay.
#[async_trait(?Send)]
pub trait FormRelay: Send + Sync {
    /// Deliver one submission to `form_id`.
    ///
    /// # Errors
    ///
    /// Returns the relay's field and general errors.
    async fn submit(&self, form_id: &str, fields: &BTreeMap<String, String>) -> Result<(), RelayFailure>;
}

pub type RelayHandle = Arc<dyn FormRelay>;

#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    errors: Vec<RawError>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawError {
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    message: String,
}

/// Parse a non-2xx relay response body.
pub fn parse_failure(body: &str, status: u16) -> RelayFailure {
    let Ok(parsed) = serde_json::from_str::<FailureBody>(body) else {
        return RelayFailure::general(format!("Submission failed: {status}"));
    };
    let mut failure = RelayFailure::default();
    for raw in parsed.errors {
        match raw.field {
            Some(field) if !field.is_empty() => failure.field_errors.push(FieldError { field, message: raw.message }),
            _ => failure.general.push(raw.message),
        }
    }
    if let Some(error) = parsed.error {
        failure.general.push(error);
    }
    if failure.field_errors.is_empty() && failure.general.is_empty() {
        failure.general.push(format!("Submission failed: {status}"));
    }
    failure
}

/// Relay backed by Formspree's JSON endpoint.
#[derive(Clone, Debug)]
pub struct FormspreeRelay {
    base_url: String,
}

impl Default for FormspreeRelay {
    fn default() -> Self {
        Self::new(FORMSPREE_BASE)
    }
}

impl FormspreeRelay {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    pub fn endpoint(&self, form_id: &str) -> String {
        format!("{}/{form_id}", self.base_url)
    }
}

#[async_trait(?Send)]
impl FormRelay for FormspreeRelay {
    async fn submit(&self, form_id: &str, fields: &BTreeMap<String, String>) -> Result<(), RelayFailure> {
        if form_id.trim().is_empty() {
            return Err(RelayFailure::general("form relay is not configured"));
        }
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(form_id))
                .header("Accept", "application/json")
                .json(fields)
                .map_err(|e| RelayFailure::general(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayFailure::general(e.to_string()))?;
            if resp.ok() {
                return Ok(());
            }
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Err(parse_failure(&body, status))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = fields;
            Err(RelayFailure::general("not available on server"))
        }
    }
}
