//! Auth routes: federated sign-in popup flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both routes run inside the popup the auth page opens. `start` redirects
//! to the provider; `callback` finishes the code flow, trades the provider
//! token for an identity credential and answers with the result page that
//! hands the outcome to the opener.
//!
//! ERROR HANDLING
//! ==============
//! Once the provider has redirected back, every failure still renders the
//! result page with `ok: false` and an `auth/*` code. The opener is waiting
//! on that message and a bare error status would strand it until the
//! viewer closes the window.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use site::net::identity::{Credential, ProviderKind};
use site::net::popup::{INTERNAL_ERROR, INVALID_STATE, OPERATION_NOT_ALLOWED, POPUP_CLOSED, PopupMessage};
use time::Duration;

use crate::services::identity::{self, IdentityError};
use crate::services::oauth::{self, OAuthError};
use crate::services::popup::render_result_page;
use crate::state::AppState;

pub(crate) const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";
const STATE_TTL_MINUTES: i64 = 10;

/// `state` cookie scoped to one provider's routes.
fn state_cookie(kind: ProviderKind, value: String, secure: bool, max_age: Duration) -> Cookie<'static> {
    Cookie::build((OAUTH_STATE_COOKIE_NAME, value))
        .path(format!("/auth/{}", kind.slug()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CallbackFailure {
    #[error("provider is not configured")]
    NotConfigured,
    #[error("viewer declined at the provider: {0}")]
    Denied(String),
    #[error("oauth state missing or mismatched")]
    InvalidState,
    #[error("callback carried no authorization code")]
    MissingCode,
    #[error(transparent)]
    Exchange(#[from] OAuthError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl CallbackFailure {
    /// Error code posted to the opener.
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured => OPERATION_NOT_ALLOWED,
            Self::Denied(_) => POPUP_CLOSED,
            Self::InvalidState => INVALID_STATE,
            Self::Identity(IdentityError::Rejected(code)) if code.starts_with("OPERATION_NOT_ALLOWED") => {
                OPERATION_NOT_ALLOWED
            }
            Self::MissingCode | Self::Exchange(_) | Self::Identity(_) => INTERNAL_ERROR,
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/{provider}` redirects to the provider's authorization page.
pub async fn start(State(state): State<AppState>, Path(provider): Path<String>) -> Response {
    let Some(kind) = ProviderKind::from_slug(&provider) else {
        return (StatusCode::NOT_FOUND, "unknown sign-in provider").into_response();
    };
    let Some(client) = state.config.oauth_client(kind) else {
        return (StatusCode::SERVICE_UNAVAILABLE, format!("{} sign-in not configured", kind.label())).into_response();
    };

    let oauth_state = oauth::generate_state();
    let url = match oauth::authorize_url(kind, client, &state.config.callback_url(kind), &oauth_state) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(provider = %kind, error = %e, "authorize url build failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "sign-in unavailable").into_response();
        }
    };

    let cookie = state_cookie(kind, oauth_state, state.config.cookie_secure, Duration::minutes(STATE_TTL_MINUTES));
    (CookieJar::new().add(cookie), Redirect::temporary(&url)).into_response()
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// `GET /auth/{provider}/callback` finishes the flow and renders the result page.
pub async fn callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let Some(kind) = ProviderKind::from_slug(&provider) else {
        return (StatusCode::NOT_FOUND, "unknown sign-in provider").into_response();
    };
    let expected_state = jar.get(OAUTH_STATE_COOKIE_NAME).map(Cookie::value).unwrap_or_default().to_owned();

    let message = match complete_sign_in(&state, kind, &expected_state, params).await {
        Ok(credential) => {
            tracing::info!(provider = %kind, uid = %credential.identity.uid, "federated sign-in completed");
            PopupMessage::success(credential)
        }
        Err(failure) => {
            tracing::warn!(provider = %kind, error = %failure, code = failure.code(), "federated sign-in failed");
            PopupMessage::failure(failure.code())
        }
    };

    let cleared = state_cookie(kind, String::new(), state.config.cookie_secure, Duration::ZERO);
    let page = render_result_page(&message, &state.config.public_origin);
    (jar.add(cleared), [(header::CACHE_CONTROL, "no-store")], Html(page)).into_response()
}

async fn complete_sign_in(
    state: &AppState,
    kind: ProviderKind,
    expected_state: &str,
    params: CallbackQuery,
) -> Result<Credential, CallbackFailure> {
    let client = state.config.oauth_client(kind).ok_or(CallbackFailure::NotConfigured)?;

    // Verify OAuth CSRF state from cookie before looking at anything else.
    let returned_state = params.state.unwrap_or_default();
    if expected_state.is_empty() || expected_state != returned_state {
        return Err(CallbackFailure::InvalidState);
    }
    if let Some(error) = params.error {
        return Err(CallbackFailure::Denied(error));
    }
    let code = params.code.filter(|c| !c.is_empty()).ok_or(CallbackFailure::MissingCode)?;

    let redirect_uri = state.config.callback_url(kind);
    let access_token =
        oauth::exchange_code(&state.http, state.upstream.token_url(kind), client, &code, &redirect_uri).await?;

    let credential = identity::sign_in_with_idp(
        &state.http,
        &state.upstream.identity_toolkit_base,
        &state.config.site.identity.api_key,
        kind,
        &access_token,
        &state.config.public_origin,
    )
    .await?;
    Ok(credential)
}
