use super::*;
use std::sync::Mutex;

use futures::executor::block_on;

fn adapter() -> FirebaseIdentity {
    FirebaseIdentity::new(IdentityConfig { api_key: "test-key".to_owned() })
}

fn credential(uid: &str) -> Credential {
    Credential {
        identity: Identity { uid: uid.to_owned(), email: None, display_name: None, provider: "password".to_owned() },
        id_token: "id".to_owned(),
        refresh_token: "refresh".to_owned(),
    }
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn endpoint_appends_method_and_key() {
    assert_eq!(
        endpoint("signUp", "abc"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=abc"
    );
}

#[test]
fn endpoint_at_tolerates_trailing_slash() {
    assert_eq!(endpoint_at("http://127.0.0.1:9/v1/", "signInWithIdp", "k"), "http://127.0.0.1:9/v1/accounts:signInWithIdp?key=k");
}

#[test]
fn credential_from_sign_up_response() {
    let body = r#"{
        "kind": "identitytoolkit#SignupNewUserResponse",
        "idToken": "tok",
        "email": "a@b.com",
        "refreshToken": "ref",
        "expiresIn": "3600",
        "localId": "123"
    }"#;
    let credential = credential_from_response(body, PASSWORD_PROVIDER).unwrap();
    assert_eq!(credential.identity.uid, "123");
    assert_eq!(credential.identity.email.as_deref(), Some("a@b.com"));
    assert_eq!(credential.identity.display_name, None);
    assert_eq!(credential.identity.provider, "password");
    assert_eq!(credential.id_token, "tok");
    assert_eq!(credential.refresh_token, "ref");
}

#[test]
fn empty_display_name_becomes_none() {
    let body = r#"{"localId":"1","idToken":"t","refreshToken":"r","displayName":"","email":""}"#;
    let credential = credential_from_response(body, "google.com").unwrap();
    assert_eq!(credential.identity.display_name, None);
    assert_eq!(credential.identity.email, None);
    assert_eq!(credential.identity.provider, "google.com");
}

#[test]
fn malformed_response_is_unknown_error() {
    let err = credential_from_response("{}", PASSWORD_PROVIDER).unwrap_err();
    assert!(matches!(err, AuthError::Unknown { .. }));
}

#[test]
fn provider_error_message_is_verbatim() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#;
    assert_eq!(provider_error_message(body, 400), "EMAIL_EXISTS");
}

#[test]
fn provider_error_message_falls_back_to_status() {
    assert_eq!(provider_error_message("<html>", 502), "request failed: 502");
}

// =============================================================
// Adapter outside the browser
// =============================================================

#[test]
fn new_adapter_without_storage_reports_no_identity() {
    let firebase = adapter();
    let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
    let sink = std::sync::Arc::clone(&seen);
    let _sub = firebase.subscribe(std::sync::Arc::new(move |identity| sink.lock().unwrap().push(identity)));
    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn password_calls_are_unavailable_on_server() {
    let firebase = adapter();
    let err = block_on(firebase.verify_with_password("a@b.com", "longenough1")).unwrap_err();
    assert_eq!(err.to_string(), "not available on server");
    let err = block_on(firebase.register_with_password("a@b.com", "longenough1")).unwrap_err();
    assert_eq!(err.to_string(), "not available on server");
    let err = block_on(firebase.sign_in_interactive(ProviderKind::Google)).unwrap_err();
    assert_eq!(err.to_string(), "not available on server");
}

#[test]
fn establish_publishes_identity() {
    let firebase = adapter();
    let identity = firebase.establish(credential("42"));
    assert_eq!(identity.uid, "42");
    assert_eq!(firebase.hub().current().map(|i| i.uid), Some("42".to_owned()));
}

#[test]
fn sign_out_clears_hub() {
    let firebase = adapter();
    firebase.establish(credential("42"));
    block_on(firebase.sign_out()).unwrap();
    assert_eq!(firebase.hub().current(), None);
    // Second sign-out is harmless.
    block_on(firebase.sign_out()).unwrap();
    assert_eq!(firebase.hub().current(), None);
}
