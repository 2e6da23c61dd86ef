use super::*;
use std::cell::RefCell;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::block_on;

use crate::net::identity::{IdentityProvider, SessionHub};
use crate::state::auth::{PASSWORD_TOO_SHORT, SessionStatus};

type MemoryStore = Arc<Mutex<Session>>;
type PendingResult = oneshot::Receiver<Result<Identity, AuthError>>;

fn identity(uid: &str) -> Identity {
    Identity {
        uid: uid.to_owned(),
        email: Some("a@b.com".to_owned()),
        display_name: None,
        provider: "password".to_owned(),
    }
}

/// Provider double backed by a real `SessionHub`.
struct FakeProvider {
    hub: Arc<SessionHub>,
    result: Mutex<Result<Identity, AuthError>>,
    sign_out_result: Mutex<Result<(), AuthError>>,
    pending: Mutex<Option<PendingResult>>,
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    fn new(result: Result<Identity, AuthError>) -> Arc<Self> {
        Arc::new(Self {
            hub: SessionHub::new(None),
            result: Mutex::new(result),
            sign_out_result: Mutex::new(Ok(())),
            pending: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: String) -> Result<Identity, AuthError> {
        self.calls.lock().unwrap().push(call);
        let pending = self.pending.lock().unwrap().take();
        let result = match pending {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(AuthError::unknown("dropped"))),
            None => self.result.lock().unwrap().clone(),
        };
        if let Ok(identity) = &result {
            self.hub.publish(Some(identity.clone()));
        }
        result
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeProvider {
    async fn register_with_password(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        self.answer(format!("register:{email}")).await
    }

    async fn verify_with_password(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        self.answer(format!("verify:{email}")).await
    }

    async fn sign_in_interactive(&self, kind: ProviderKind) -> Result<Identity, AuthError> {
        self.answer(format!("interactive:{kind}")).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.calls.lock().unwrap().push("sign_out".to_owned());
        let result = self.sign_out_result.lock().unwrap().clone();
        if result.is_ok() {
            self.hub.publish(None);
        }
        result
    }

    fn subscribe(&self, listener: SessionListener) -> Subscription {
        self.hub.subscribe(listener)
    }
}

/// Provider that never releases listeners, to exercise the liveness guard.
#[derive(Default)]
struct LeakyProvider {
    listeners: Mutex<Vec<SessionListener>>,
}

impl LeakyProvider {
    fn emit(&self, identity: Option<Identity>) {
        for listener in self.listeners.lock().unwrap().iter() {
            listener(identity.clone());
        }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for LeakyProvider {
    async fn register_with_password(&self, _: &str, _: &str) -> Result<Identity, AuthError> {
        Err(AuthError::unknown("unused"))
    }

    async fn verify_with_password(&self, _: &str, _: &str) -> Result<Identity, AuthError> {
        Err(AuthError::unknown("unused"))
    }

    async fn sign_in_interactive(&self, _: ProviderKind) -> Result<Identity, AuthError> {
        Err(AuthError::unknown("unused"))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }

    fn subscribe(&self, listener: SessionListener) -> Subscription {
        self.listeners.lock().unwrap().push(listener);
        Subscription::detached()
    }
}

struct Harness {
    controller: SessionController<MemoryStore>,
    store: MemoryStore,
    navigations: Rc<RefCell<Vec<String>>>,
    prompts: Rc<RefCell<Vec<String>>>,
}

fn harness(provider: IdentityHandle, confirm_answer: bool) -> Harness {
    let store: MemoryStore = Arc::new(Mutex::new(Session::default()));
    let navigations = Rc::new(RefCell::new(Vec::new()));
    let prompts = Rc::new(RefCell::new(Vec::new()));
    let nav_sink = Rc::clone(&navigations);
    let prompt_sink = Rc::clone(&prompts);
    let controller = SessionController::new(
        provider,
        Arc::clone(&store),
        Rc::new(move |path: &str| nav_sink.borrow_mut().push(path.to_owned())),
        Rc::new(move |prompt: &str| {
            prompt_sink.borrow_mut().push(prompt.to_owned());
            confirm_answer
        }),
    );
    Harness { controller, store, navigations, prompts }
}

impl Harness {
    fn session(&self) -> Session {
        self.store.lock().unwrap().clone()
    }

    fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

// =============================================================
// Local validation
// =============================================================

#[test]
fn short_password_never_reaches_provider() {
    let provider = FakeProvider::new(Ok(identity("123")));
    let h = harness(provider.clone(), true);

    let err = block_on(h.controller.sign_up("a@b.com", "short")).unwrap_err();

    assert_eq!(err.field_errors().and_then(|e| e.password), Some(PASSWORD_TOO_SHORT));
    assert_eq!(err.to_string(), "Password must be at least 8 characters");
    assert!(provider.calls().is_empty());
    assert_eq!(h.session().status(), SessionStatus::Unknown);
    assert!(h.navigations().is_empty());
}

#[test]
fn empty_email_never_reaches_provider() {
    let provider = FakeProvider::new(Ok(identity("123")));
    let h = harness(provider.clone(), true);

    let err = block_on(h.controller.sign_in("", "longenough1")).unwrap_err();

    assert_eq!(err.field_errors().and_then(|e| e.email), Some("Email is required"));
    assert!(provider.calls().is_empty());
}

#[test]
fn validation_failure_clears_previous_provider_error() {
    let provider = FakeProvider::new(Err(AuthError::provider("INVALID_LOGIN_CREDENTIALS")));
    let h = harness(provider.clone(), true);
    block_on(h.controller.sign_in("a@b.com", "longenough1")).unwrap_err();
    assert_eq!(h.session().last_error(), Some("INVALID_LOGIN_CREDENTIALS"));

    let err = block_on(h.controller.sign_in("a@b.com", "short")).unwrap_err();

    assert_eq!(err.field_errors().and_then(|e| e.password), Some(PASSWORD_TOO_SHORT));
    let session = h.session();
    assert_eq!(session.last_error(), None);
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert_eq!(provider.calls().len(), 1);
}

// =============================================================
// Provider outcomes
// =============================================================

#[test]
fn sign_up_success_authenticates_and_navigates_home_once() {
    let provider = FakeProvider::new(Ok(identity("123")));
    let h = harness(provider.clone(), true);

    let identity = block_on(h.controller.sign_up("a@b.com", "longenough1")).unwrap();

    assert_eq!(identity.uid, "123");
    let session = h.session();
    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(session.identity().map(|i| i.uid.as_str()), Some("123"));
    assert_eq!(h.navigations(), vec![HOME_PATH.to_owned()]);
    assert_eq!(provider.calls(), vec!["register:a@b.com".to_owned()]);
}

#[test]
fn sign_in_uses_verify_and_trimmed_email() {
    let provider = FakeProvider::new(Ok(identity("123")));
    let h = harness(provider.clone(), true);

    block_on(h.controller.sign_in(" a@b.com ", "longenough1")).unwrap();

    assert_eq!(provider.calls(), vec!["verify:a@b.com".to_owned()]);
}

#[test]
fn provider_failure_sets_error_with_verbatim_message() {
    let provider = FakeProvider::new(Err(AuthError::provider("EMAIL_EXISTS")));
    let h = harness(provider, true);

    let err = block_on(h.controller.sign_up("a@b.com", "longenough1")).unwrap_err();

    assert_eq!(err, AuthError::provider("EMAIL_EXISTS"));
    let session = h.session();
    assert_eq!(session.status(), SessionStatus::Error);
    assert_eq!(session.last_error(), Some("EMAIL_EXISTS"));
    assert!(session.identity().is_none());
    assert!(h.navigations().is_empty());
}

#[test]
fn status_is_authenticating_while_provider_call_is_pending() {
    let provider = FakeProvider::new(Ok(identity("unused")));
    let (tx, rx) = oneshot::channel();
    *provider.pending.lock().unwrap() = Some(rx);
    let h = harness(provider, true);

    let observed_midway = RefCell::new(None);
    block_on(async {
        futures::join!(h.controller.sign_in("a@b.com", "longenough1"), async {
            *observed_midway.borrow_mut() = Some(h.session().status());
            let _ = tx.send(Ok(identity("9")));
        })
    })
    .0
    .unwrap();

    assert_eq!(*observed_midway.borrow(), Some(SessionStatus::Authenticating));
    assert_eq!(h.session().status(), SessionStatus::Authenticated);
}

#[test]
fn federated_failure_surfaces_popup_code() {
    let provider = FakeProvider::new(Err(AuthError::provider("auth/popup-blocked")));
    let h = harness(provider.clone(), true);

    let err = block_on(h.controller.sign_in_federated(ProviderKind::Google)).unwrap_err();

    assert_eq!(err.to_string(), "auth/popup-blocked");
    assert_eq!(h.session().last_error(), Some("auth/popup-blocked"));
    assert_eq!(provider.calls(), vec!["interactive:google".to_owned()]);
}

#[test]
fn federated_success_authenticates() {
    let provider = FakeProvider::new(Ok(identity("gh")));
    let h = harness(provider, true);

    block_on(h.controller.sign_in_federated(ProviderKind::GitHub)).unwrap();

    assert!(h.session().is_authenticated());
    assert_eq!(h.navigations().len(), 1);
}

// =============================================================
// Sign out
// =============================================================

#[test]
fn confirmed_sign_out_clears_identity_and_navigates() {
    let provider = FakeProvider::new(Ok(identity("123")));
    let h = harness(provider.clone(), true);
    let _observer = h.controller.observe();
    block_on(h.controller.sign_in("a@b.com", "longenough1")).unwrap();

    let outcome = block_on(h.controller.sign_out()).unwrap();

    assert_eq!(outcome, SignOutOutcome::SignedOut);
    assert_eq!(h.session().status(), SessionStatus::Unauthenticated);
    assert!(h.session().identity().is_none());
    assert_eq!(h.prompts.borrow().as_slice(), [SIGN_OUT_PROMPT.to_owned()]);
    assert_eq!(h.navigations(), vec![HOME_PATH.to_owned(), HOME_PATH.to_owned()]);
}

#[test]
fn declined_sign_out_skips_provider_and_keeps_state() {
    let provider = FakeProvider::new(Ok(identity("123")));
    let h = harness(provider.clone(), false);
    block_on(h.controller.sign_in("a@b.com", "longenough1")).unwrap();
    let before = h.session();

    let outcome = block_on(h.controller.sign_out()).unwrap();

    assert_eq!(outcome, SignOutOutcome::Declined);
    assert_eq!(h.session(), before);
    assert!(!provider.calls().contains(&"sign_out".to_owned()));
}

#[test]
fn failed_sign_out_keeps_state_and_returns_error() {
    let provider = FakeProvider::new(Ok(identity("123")));
    *provider.sign_out_result.lock().unwrap() = Err(AuthError::network("offline"));
    let h = harness(provider, true);
    block_on(h.controller.sign_in("a@b.com", "longenough1")).unwrap();
    let before = h.session();

    let err = block_on(h.controller.sign_out()).unwrap_err();

    assert_eq!(err, AuthError::network("offline"));
    assert_eq!(h.session(), before);
    assert_eq!(h.navigations().len(), 1);
}

#[test]
fn sign_out_twice_is_idempotent() {
    let provider = FakeProvider::new(Ok(identity("123")));
    let h = harness(provider, true);

    for _ in 0..2 {
        let outcome = block_on(h.controller.sign_out()).unwrap();
        assert_eq!(outcome, SignOutOutcome::SignedOut);
        assert_eq!(h.session().status(), SessionStatus::Unauthenticated);
    }
}

// =============================================================
// Observe
// =============================================================

#[test]
fn observe_reflects_current_and_later_provider_state() {
    let provider = FakeProvider::new(Ok(identity("123")));
    provider.hub.publish(Some(identity("restored")));
    let h = harness(provider.clone(), true);

    let _observer = h.controller.observe();
    assert_eq!(h.session().identity().map(|i| i.uid.as_str()), Some("restored"));

    provider.hub.publish(None);
    assert_eq!(h.session().status(), SessionStatus::Unauthenticated);
}

#[test]
fn two_pages_converge_on_provider_session() {
    let provider = FakeProvider::new(Ok(identity("123")));
    let home = harness(provider.clone(), true);
    let auth = harness(provider.clone(), true);
    let _home_observer = home.controller.observe();
    let _auth_observer = auth.controller.observe();

    block_on(auth.controller.sign_in("a@b.com", "longenough1")).unwrap();

    assert!(home.session().is_authenticated());
    assert_eq!(home.session().identity(), auth.session().identity());
}

#[test]
fn released_observer_releases_provider_subscription() {
    let provider = FakeProvider::new(Ok(identity("123")));
    let h = harness(provider.clone(), true);
    let observer = h.controller.observe();
    assert_eq!(provider.hub.listener_count(), 1);

    drop(observer);

    assert_eq!(provider.hub.listener_count(), 0);
    assert!(!h.controller.is_live());
}

#[test]
fn late_notification_after_teardown_does_not_mutate() {
    let provider = Arc::new(LeakyProvider::default());
    let h = harness(provider.clone(), true);
    let observer = h.controller.observe();
    provider.emit(None);
    assert_eq!(h.session().status(), SessionStatus::Unauthenticated);

    drop(observer);
    provider.emit(Some(identity("late")));

    assert_eq!(h.session().status(), SessionStatus::Unauthenticated);
    assert!(h.session().identity().is_none());
}

#[test]
fn completion_after_teardown_neither_writes_nor_navigates() {
    let provider = FakeProvider::new(Ok(identity("unused")));
    let (tx, rx) = oneshot::channel();
    *provider.pending.lock().unwrap() = Some(rx);
    let h = harness(provider, true);
    let observer = h.controller.observe();

    let (result, ()) = block_on(async {
        futures::join!(h.controller.sign_in("a@b.com", "longenough1"), async move {
            drop(observer);
            let _ = tx.send(Ok(identity("late")));
        })
    });

    assert!(result.is_ok());
    assert_eq!(h.session().status(), SessionStatus::Authenticating);
    assert!(h.navigations().is_empty());
}
