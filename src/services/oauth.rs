//! OAuth code flow against Google and GitHub.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser opens `/auth/{provider}` in a popup. The route redirects to
//! the provider with a random `state`, the provider redirects back to the
//! callback with a `code`, and [`exchange_code`] trades that code for the
//! provider access token that the identity service accepts.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use rand::Rng;
use reqwest::Url;
use serde::Deserialize;
use site::net::identity::ProviderKind;

pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// Client registration for one provider, loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthClient {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("oauth request failed: {0}")]
    Request(String),
    #[error("oauth provider rejected the request: {0}")]
    Rejected(String),
    #[error("unexpected oauth response: {0}")]
    Malformed(String),
}

#[must_use]
pub fn default_token_url(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Google => GOOGLE_TOKEN_URL,
        ProviderKind::GitHub => GITHUB_TOKEN_URL,
    }
}

fn authorize_base(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Google => GOOGLE_AUTHORIZE_URL,
        ProviderKind::GitHub => GITHUB_AUTHORIZE_URL,
    }
}

fn scope(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Google => "openid email profile",
        ProviderKind::GitHub => "read:user user:email",
    }
}

/// Random 32-byte hex value for the `state` parameter.
#[must_use]
pub fn generate_state() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Provider authorization URL with the query encoded.
///
/// # Errors
///
/// Returns `Malformed` if the base URL cannot be parsed.
pub fn authorize_url(kind: ProviderKind, client: &OAuthClient, redirect_uri: &str, state: &str) -> Result<String, OAuthError> {
    let url = Url::parse_with_params(
        authorize_base(kind),
        &[
            ("client_id", client.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", scope(kind)),
            ("state", state),
        ],
    )
    .map_err(|e| OAuthError::Malformed(e.to_string()))?;
    Ok(url.into())
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Extract the access token from a token endpoint body.
///
/// GitHub reports failures as `200 OK` with an `error` field, so the body is
/// checked regardless of status.
///
/// # Errors
///
/// Returns `Rejected` for an error payload and `Malformed` for anything else
/// without an access token.
pub fn parse_token_response(body: &str) -> Result<String, OAuthError> {
    let parsed: TokenResponse =
        serde_json::from_str(body).map_err(|_| OAuthError::Malformed(format!("unexpected response: {body}")))?;
    if let Some(error) = parsed.error {
        let detail = parsed.error_description.map_or(error.clone(), |d| format!("{error}: {d}"));
        return Err(OAuthError::Rejected(detail));
    }
    parsed
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| OAuthError::Malformed("missing access_token".to_owned()))
}

/// Exchange an authorization code for an access token at `token_url`.
///
/// # Errors
///
/// Returns `Request` on transport failure, otherwise whatever
/// [`parse_token_response`] reports.
pub async fn exchange_code(
    http: &reqwest::Client,
    token_url: &str,
    client: &OAuthClient,
    code: &str,
    redirect_uri: &str,
) -> Result<String, OAuthError> {
    let resp = http
        .post(token_url)
        .header("Accept", "application/json")
        .form(&[
            ("client_id", client.client_id.as_str()),
            ("client_secret", client.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| OAuthError::Request(e.to_string()))?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| OAuthError::Request(e.to_string()))?;
    match parse_token_response(&body) {
        Err(OAuthError::Malformed(_)) if !status.is_success() => Err(OAuthError::Rejected(format!("{status}: {body}"))),
        other => other,
    }
}
