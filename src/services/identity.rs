//! Federated sign-in against the identity provider's REST API.
//!
//! The OAuth access token obtained by the callback is traded for an identity
//! credential through `accounts:signInWithIdp`. Response parsing is shared
//! with the browser crate so both sides build the same `Credential`.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::Serialize;
use site::net::firebase::{credential_from_response, endpoint_at, provider_error_message};
use site::net::identity::{Credential, ProviderKind};

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity request failed: {0}")]
    Request(String),
    /// Provider error code such as `OPERATION_NOT_ALLOWED`.
    #[error("identity provider rejected sign-in: {0}")]
    Rejected(String),
    #[error("unexpected identity response: {0}")]
    Malformed(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInWithIdpRequest<'a> {
    post_body: String,
    request_uri: &'a str,
    return_idp_credential: bool,
    return_secure_token: bool,
}

/// `postBody` form carrying the provider token.
#[must_use]
pub fn idp_post_body(kind: ProviderKind, access_token: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("access_token", access_token)
        .append_pair("providerId", kind.provider_id())
        .finish()
}

/// Sign in with a provider access token.
///
/// `base` is the Identity Toolkit API root and `request_uri` the origin the
/// flow ran under.
///
/// # Errors
///
/// Returns `Request` on transport failure, `Rejected` with the provider's
/// error code on a non-success status, and `Malformed` when a success body
/// is not an account response.
pub async fn sign_in_with_idp(
    http: &reqwest::Client,
    base: &str,
    api_key: &str,
    kind: ProviderKind,
    access_token: &str,
    request_uri: &str,
) -> Result<Credential, IdentityError> {
    let request = SignInWithIdpRequest {
        post_body: idp_post_body(kind, access_token),
        request_uri,
        return_idp_credential: true,
        return_secure_token: true,
    };
    let resp = http
        .post(endpoint_at(base, "signInWithIdp", api_key))
        .json(&request)
        .send()
        .await
        .map_err(|e| IdentityError::Request(e.to_string()))?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| IdentityError::Request(e.to_string()))?;
    if !status.is_success() {
        return Err(IdentityError::Rejected(provider_error_message(&body, status.as_u16())));
    }
    credential_from_response(&body, kind.provider_id()).map_err(|e| IdentityError::Malformed(e.to_string()))
}
