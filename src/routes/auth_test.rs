use super::*;
use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use axum::routing::post;
use serde_json::json;
use site::net::popup::parse_message;
use tower::ServiceExt;

use crate::config::ServerConfig;
use crate::routes::auth_routes;
use crate::state::Upstream;
use crate::test_support::serve_stub;

fn config(pairs: &[(&str, &str)]) -> ServerConfig {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

fn github_config() -> ServerConfig {
    config(&[
        ("PUBLIC_ORIGIN", "http://localhost:3000"),
        ("FIREBASE_API_KEY", "api-key"),
        ("GITHUB_CLIENT_ID", "hid"),
        ("GITHUB_CLIENT_SECRET", "hs"),
    ])
}

async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
}

async fn popup_message(resp: Response) -> PopupMessage {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    let open = r#"<script id="auth-result" type="application/json">"#;
    let start = page.find(open).unwrap() + open.len();
    let end = start + page[start..].find("</script>").unwrap();
    parse_message(&page[start..end]).unwrap()
}

fn set_cookie(resp: &Response) -> String {
    resp.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap().to_owned()
}

/// Token endpoint plus identity endpoint on one local stub.
async fn upstream_stub(identity_status: StatusCode, identity_body: serde_json::Value) -> Upstream {
    let router = Router::new()
        .route("/token", post(|| async { Json(json!({"access_token": "gho_token"})) }))
        .route(
            "/v1/accounts:signInWithIdp",
            post(move || {
                let body = identity_body.clone();
                async move { (identity_status, Json(body)) }
            }),
        );
    let base = serve_stub(router).await;
    Upstream {
        identity_toolkit_base: format!("{base}/v1"),
        google_token_url: format!("{base}/token"),
        github_token_url: format!("{base}/token"),
    }
}

// =============================================================================
// CallbackFailure::code
// =============================================================================

#[test]
fn failure_codes_map_to_popup_codes() {
    assert_eq!(CallbackFailure::InvalidState.code(), INVALID_STATE);
    assert_eq!(CallbackFailure::Denied("access_denied".to_owned()).code(), POPUP_CLOSED);
    assert_eq!(CallbackFailure::NotConfigured.code(), OPERATION_NOT_ALLOWED);
    assert_eq!(
        CallbackFailure::Identity(IdentityError::Rejected("OPERATION_NOT_ALLOWED : disabled".to_owned())).code(),
        OPERATION_NOT_ALLOWED
    );
    assert_eq!(CallbackFailure::Identity(IdentityError::Rejected("INVALID_IDP_RESPONSE".to_owned())).code(), INTERNAL_ERROR);
    assert_eq!(CallbackFailure::Exchange(OAuthError::Request("down".to_owned())).code(), INTERNAL_ERROR);
    assert_eq!(CallbackFailure::MissingCode.code(), INTERNAL_ERROR);
}

// =============================================================================
// start
// =============================================================================

#[tokio::test]
async fn start_unknown_provider_is_not_found() {
    let app = auth_routes(AppState::new(github_config()));
    let resp = get(app, "/auth/myspace", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn start_unconfigured_provider_is_unavailable() {
    let app = auth_routes(AppState::new(github_config()));
    let resp = get(app, "/auth/google", None).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn start_redirects_with_matching_state_cookie() {
    let app = auth_routes(AppState::new(github_config()));
    let resp = get(app, "/auth/github", None).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_owned();
    assert!(location.starts_with("https://github.com/login/oauth/authorize?"));

    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("oauth_state="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/auth/github"));
    assert!(cookie.contains("Max-Age=600"));

    let state_value = cookie.trim_start_matches("oauth_state=").split(';').next().unwrap();
    assert!(location.contains(&format!("state={state_value}")));
}

// =============================================================================
// callback
// =============================================================================

#[tokio::test]
async fn callback_rejects_mismatched_state() {
    let app = auth_routes(AppState::new(github_config()));
    let resp = get(app, "/auth/github/callback?code=c&state=forged", Some("oauth_state=expected")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(set_cookie(&resp).contains("Max-Age=0"));
    let message = popup_message(resp).await;
    assert!(!message.ok);
    assert_eq!(message.error.as_deref(), Some(INVALID_STATE));
}

#[tokio::test]
async fn callback_without_state_cookie_is_invalid_state() {
    let app = auth_routes(AppState::new(github_config()));
    let resp = get(app, "/auth/github/callback?code=c&state=s", None).await;
    assert_eq!(popup_message(resp).await.error.as_deref(), Some(INVALID_STATE));
}

#[tokio::test]
async fn callback_reports_viewer_cancel_as_closed() {
    let app = auth_routes(AppState::new(github_config()));
    let resp = get(app, "/auth/github/callback?error=access_denied&state=s1", Some("oauth_state=s1")).await;
    assert_eq!(popup_message(resp).await.error.as_deref(), Some(POPUP_CLOSED));
}

#[tokio::test]
async fn callback_for_unconfigured_provider_is_not_allowed() {
    let app = auth_routes(AppState::new(github_config()));
    let resp = get(app, "/auth/google/callback?code=c&state=s1", Some("oauth_state=s1")).await;
    assert_eq!(popup_message(resp).await.error.as_deref(), Some(OPERATION_NOT_ALLOWED));
}

#[tokio::test]
async fn callback_success_posts_credential() {
    let upstream = upstream_stub(
        StatusCode::OK,
        json!({
            "localId": "uid-1",
            "email": "dev@example.org",
            "displayName": "Dev",
            "idToken": "id-tok",
            "refreshToken": "ref-tok"
        }),
    )
    .await;
    let app = auth_routes(AppState::with_upstream(github_config(), upstream));
    let resp = get(app, "/auth/github/callback?code=abc&state=s1", Some("oauth_state=s1")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");
    let message = popup_message(resp).await;
    assert!(message.ok);
    let credential = message.credential.unwrap();
    assert_eq!(credential.identity.uid, "uid-1");
    assert_eq!(credential.identity.provider, "github.com");
    assert_eq!(credential.identity.display_name.as_deref(), Some("Dev"));
}

#[tokio::test]
async fn callback_identity_rejection_posts_code() {
    let upstream =
        upstream_stub(StatusCode::BAD_REQUEST, json!({"error": {"code": 400, "message": "OPERATION_NOT_ALLOWED"}})).await;
    let app = auth_routes(AppState::with_upstream(github_config(), upstream));
    let resp = get(app, "/auth/github/callback?code=abc&state=s1", Some("oauth_state=s1")).await;

    let message = popup_message(resp).await;
    assert!(!message.ok);
    assert_eq!(message.error.as_deref(), Some(OPERATION_NOT_ALLOWED));
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = auth_routes(AppState::new(github_config()));
    assert_eq!(get(app, "/healthz", None).await.status(), StatusCode::OK);
}
