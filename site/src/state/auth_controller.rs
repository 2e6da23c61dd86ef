//! Page-level session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page that shows session-aware UI owns one `SessionController`. It
//! mirrors the provider's session into a page-local `Session` cell, runs
//! sign-up, sign-in, federated sign-in and sign-out, and navigates home when
//! an operation completes.
//!
//! DESIGN
//! ======
//! - All writes replace the whole `Session`; the provider's notifications and
//!   local results race by last-writer-wins.
//! - Every write, including writes from async continuations, checks the
//!   controller's liveness token first. `observe` hands back a guard whose
//!   drop revokes that token and releases the provider subscription, so a
//!   completion arriving after teardown neither writes nor navigates.
//! - Credential validation runs before the provider is touched; a rejected
//!   form leaves the session as it was.
//!
//! ```text
//! Unknown ──observe──▶ Authenticated | Unauthenticated
//!    any ──sign-in/up──▶ Authenticating ──▶ Authenticated (+ navigate home)
//!                                       └─▶ Error
//!    any ──sign-out (confirmed, ok)──▶ Unauthenticated (+ navigate home)
//! ```

#[cfg(test)]
#[path = "auth_controller_test.rs"]
mod auth_controller_test;

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging::warn;

use super::auth::{AuthError, Session, validate_credentials};
use crate::net::identity::{Identity, IdentityHandle, ProviderKind, SessionListener, Subscription};
use crate::util::store::StateStore;

pub const HOME_PATH: &str = "/";
pub const SIGN_OUT_PROMPT: &str = "Are you sure you want to sign out?";

/// Client-side navigation, e.g. the router's `use_navigate`.
pub type Navigate = Rc<dyn Fn(&str)>;

/// Blocking yes/no prompt, e.g. `window.confirm`.
pub type Confirm = Rc<dyn Fn(&str) -> bool>;

/// Which password operation the credential form runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialMode {
    #[default]
    SignUp,
    SignIn,
}

impl CredentialMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignUp => Self::SignIn,
            Self::SignIn => Self::SignUp,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut,
    /// The viewer answered no to the confirmation.
    Declined,
}

#[derive(Clone)]
pub struct SessionController<S> {
    provider: IdentityHandle,
    store: S,
    navigate: Navigate,
    confirm: Confirm,
    live: Arc<AtomicBool>,
}

impl<S> SessionController<S>
where
    S: StateStore<Session> + Send + Sync,
{
    pub fn new(provider: IdentityHandle, store: S, navigate: Navigate, confirm: Confirm) -> Self {
        Self { provider, store, navigate, confirm, live: Arc::new(AtomicBool::new(true)) }
    }

    pub fn session(&self) -> Session {
        self.store.snapshot()
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Mirror the provider's session stream into this controller's cell.
    ///
    /// Call once per controller. Dropping the returned guard tears the
    /// controller down for good.
    pub fn observe(&self) -> SessionObserver {
        let store = self.store.clone();
        let live = Arc::clone(&self.live);
        let listener: SessionListener = Arc::new(move |identity: Option<Identity>| {
            if live.load(Ordering::Acquire) {
                store.replace(Session::observed(identity));
            }
        });
        let subscription = self.provider.subscribe(listener);
        SessionObserver { subscription: Some(subscription), live: Arc::clone(&self.live) }
    }

    /// # Errors
    ///
    /// Returns `AuthError::Validation` without calling the provider when the
    /// credentials are rejected locally, otherwise the provider's error.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.submit_credentials(CredentialMode::SignUp, email, password).await
    }

    /// # Errors
    ///
    /// Same as [`SessionController::sign_up`].
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.submit_credentials(CredentialMode::SignIn, email, password).await
    }

    /// # Errors
    ///
    /// Same as [`SessionController::sign_up`].
    pub async fn submit_credentials(
        &self,
        mode: CredentialMode,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let credentials = match validate_credentials(email, password) {
            Ok(credentials) => credentials,
            Err(errors) => {
                // A previous provider failure no longer describes this attempt.
                self.write(self.session().cleared_error());
                return Err(AuthError::Validation(errors));
            }
        };
        self.write(Session::authenticating());
        let result = match mode {
            CredentialMode::SignUp => {
                self.provider.register_with_password(&credentials.email, &credentials.password).await
            }
            CredentialMode::SignIn => {
                self.provider.verify_with_password(&credentials.email, &credentials.password).await
            }
        };
        self.settle(result)
    }

    /// Run the provider's popup consent flow for `kind`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error, e.g. `auth/popup-blocked`.
    pub async fn sign_in_federated(&self, kind: ProviderKind) -> Result<Identity, AuthError> {
        self.write(Session::authenticating());
        let result = self.provider.sign_in_interactive(kind).await;
        self.settle(result)
    }

    /// Confirm with the viewer, then sign out and go home.
    ///
    /// # Errors
    ///
    /// Returns the provider's failure. The session is left as it was.
    pub async fn sign_out(&self) -> Result<SignOutOutcome, AuthError> {
        if !(self.confirm)(SIGN_OUT_PROMPT) {
            return Ok(SignOutOutcome::Declined);
        }
        match self.provider.sign_out().await {
            Ok(()) => {
                if self.write(Session::signed_out()) {
                    (self.navigate)(HOME_PATH);
                }
                Ok(SignOutOutcome::SignedOut)
            }
            Err(e) => {
                warn!("sign out failed: {e}");
                Err(e)
            }
        }
    }

    fn settle(&self, result: Result<Identity, AuthError>) -> Result<Identity, AuthError> {
        match result {
            Ok(identity) => {
                if self.write(Session::authenticated(identity.clone())) {
                    (self.navigate)(HOME_PATH);
                }
                Ok(identity)
            }
            Err(e) => {
                self.write(Session::failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Replace the session unless the controller was torn down.
    fn write(&self, session: Session) -> bool {
        if !self.is_live() {
            return false;
        }
        self.store.replace(session);
        true
    }
}

/// Guard returned by [`SessionController::observe`].
pub struct SessionObserver {
    subscription: Option<Subscription>,
    live: Arc<AtomicBool>,
}

impl Drop for SessionObserver {
    fn drop(&mut self) {
        self.live.store(false, Ordering::Release);
        drop(self.subscription.take());
    }
}
