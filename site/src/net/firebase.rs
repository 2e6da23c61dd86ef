//! Firebase Identity Toolkit adapter.
//!
//! Client-side (hydrate): REST calls via `gloo-net`, credential persisted in
//! `localStorage`, federated sign-in through the server popup flow.
//! Server-side (SSR): provider calls return `AuthError::Unknown` since they
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections carry the provider's `error.message` verbatim
//! (`EMAIL_EXISTS`, `INVALID_LOGIN_CREDENTIALS`, ...). Transport failures
//! map to `AuthError::Network`. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::identity::{Credential, Identity, IdentityProvider, ProviderKind, SessionHub, SessionListener, Subscription};
use crate::config::IdentityConfig;
use crate::state::auth::AuthError;
use crate::util::storage;

/// `localStorage` key of the persisted credential.
pub const CREDENTIAL_KEY: &str = "initiative_auth_credential";
pub const IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
/// Provider id recorded for email + password accounts.
pub const PASSWORD_PROVIDER: &str = "password";

/// REST endpoint for an `accounts:*` method.
pub fn endpoint(method: &str, api_key: &str) -> String {
    endpoint_at(IDENTITY_TOOLKIT_BASE, method, api_key)
}

/// [`endpoint`] against an explicit API base.
pub fn endpoint_at(base: &str, method: &str, api_key: &str) -> String {
    format!("{}/accounts:{method}?key={api_key}", base.trim_end_matches('/'))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
}

/// Build a credential from a successful `accounts:*` response body.
///
/// Empty strings reported for optional profile fields become `None`.
///
/// # Errors
///
/// Returns `AuthError::Unknown` when the body is not an account response.
pub fn credential_from_response(body: &str, provider: &str) -> Result<Credential, AuthError> {
    let raw: AccountResponse =
        serde_json::from_str(body).map_err(|e| AuthError::unknown(format!("malformed provider response: {e}")))?;
    let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
    Ok(Credential {
        identity: Identity {
            uid: raw.local_id,
            email: non_empty(raw.email),
            display_name: non_empty(raw.display_name),
            provider: provider.to_owned(),
        },
        id_token: raw.id_token,
        refresh_token: raw.refresh_token,
    })
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the provider's rejection message from an error response.
pub fn provider_error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| format!("request failed: {status}"))
}

/// Identity provider backed by a Firebase project.
pub struct FirebaseIdentity {
    config: IdentityConfig,
    hub: Arc<SessionHub>,
}

impl FirebaseIdentity {
    /// Create the adapter, restoring a persisted credential if one exists.
    pub fn new(config: IdentityConfig) -> Self {
        let restored = storage::load_json::<Credential>(CREDENTIAL_KEY).map(|c| c.identity);
        Self { config, hub: SessionHub::new(restored) }
    }

    pub fn hub(&self) -> &Arc<SessionHub> {
        &self.hub
    }

    /// Persist `credential` and broadcast its identity.
    #[cfg(any(test, feature = "hydrate"))]
    fn establish(&self, credential: Credential) -> Identity {
        if !storage::save_json(CREDENTIAL_KEY, &credential) {
            leptos::logging::warn!("credential not persisted; session lasts for this page only");
        }
        let identity = credential.identity;
        self.hub.publish(Some(identity.clone()));
        identity
    }

    #[cfg(feature = "hydrate")]
    async fn password_request(&self, method: &str, email: &str, password: &str) -> Result<Identity, AuthError> {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let resp = gloo_net::http::Request::post(&endpoint(method, &self.config.api_key))
            .json(&payload)
            .map_err(|e| AuthError::unknown(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::network(e.to_string()))?;
        let status = resp.status();
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| AuthError::network(e.to_string()))?;
        if !ok {
            return Err(AuthError::provider(provider_error_message(&body, status)));
        }
        let credential = credential_from_response(&body, PASSWORD_PROVIDER)?;
        Ok(self.establish(credential))
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseIdentity {
    async fn register_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            self.password_request("signUp", email, password).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, &self.config);
            Err(AuthError::unavailable())
        }
    }

    async fn verify_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            self.password_request("signInWithPassword", email, password).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::unavailable())
        }
    }

    async fn sign_in_interactive(&self, kind: ProviderKind) -> Result<Identity, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let credential = super::popup::run_popup_flow(&super::popup::start_path(kind)).await?;
            Ok(self.establish(credential))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = kind;
            Err(AuthError::unavailable())
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        storage::remove(CREDENTIAL_KEY).map_err(AuthError::unknown)?;
        self.hub.publish(None);
        Ok(())
    }

    fn subscribe(&self, listener: SessionListener) -> Subscription {
        self.hub.subscribe(listener)
    }
}
