//! Identity-provider contract and the process-wide session hub.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionController` talks to the hosted identity provider only through
//! [`IdentityProvider`]. The browser build injects `FirebaseIdentity`; tests
//! inject fakes. One provider handle is created per application and shared
//! through Leptos context.
//!
//! DESIGN
//! ======
//! The provider's signed-in identity is a singleton for the whole client.
//! [`SessionHub`] owns it and fans every change out to subscribers in
//! emission order. A new subscriber receives the current value immediately,
//! so a page that mounts late still converges on the canonical session.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::state::auth::AuthError;

/// Signed-in user record as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned user id.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Sign-in method, e.g. `"password"`, `"google.com"`, `"github.com"`.
    pub provider: String,
}

/// Identity plus the provider tokens backing it. Never handed to views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub identity: Identity,
    pub id_token: String,
    pub refresh_token: String,
}

/// Federated sign-in providers offered on the auth page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Google,
    GitHub,
}

impl ProviderKind {
    pub const ALL: [Self; 2] = [Self::Google, Self::GitHub];

    /// URL path segment used by the server's popup routes.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Provider id as recorded by the identity provider.
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Google => "google.com",
            Self::GitHub => "github.com",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "GOOGLE",
            Self::GitHub => "GITHUB",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Callback invoked with each session change.
pub type SessionListener = Arc<dyn Fn(Option<Identity>) + Send + Sync>;

/// Disposer returned by [`IdentityProvider::subscribe`].
///
/// Dropping it releases the subscription.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Release now instead of at drop.
    pub fn unsubscribe(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Contract of the hosted identity provider.
#[async_trait(?Send)]
pub trait IdentityProvider: Send + Sync {
    /// Create an account with email + password and sign it in.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection message, or a transport failure.
    async fn register_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Sign in an existing email + password account.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection message, or a transport failure.
    async fn verify_with_password(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Run the provider's interactive consent flow.
    ///
    /// # Errors
    ///
    /// Returns the provider's error code, e.g. `auth/popup-blocked`.
    async fn sign_in_interactive(&self, kind: ProviderKind) -> Result<Identity, AuthError>;

    /// Sign the current identity out.
    ///
    /// # Errors
    ///
    /// Returns a failure when the local credential could not be cleared.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Subscribe to session changes. The current value is delivered first.
    fn subscribe(&self, listener: SessionListener) -> Subscription;
}

/// Init-once provider handle shared through context.
pub type IdentityHandle = Arc<dyn IdentityProvider>;

// =============================================================================
// SESSION HUB
// =============================================================================

struct HubInner {
    current: Option<Identity>,
    listeners: Vec<(u64, SessionListener)>,
    next_id: u64,
}

/// Canonical signed-in identity plus its subscriber registry.
pub struct SessionHub {
    inner: Mutex<HubInner>,
}

impl SessionHub {
    #[must_use]
    pub fn new(initial: Option<Identity>) -> Arc<Self> {
        Arc::new(Self { inner: Mutex::new(HubInner { current: initial, listeners: Vec::new(), next_id: 0 }) })
    }

    pub fn current(&self) -> Option<Identity> {
        self.lock().current.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Replace the canonical identity and notify every subscriber in order.
    ///
    /// Listeners run outside the lock so they may re-enter the hub.
    pub fn publish(&self, identity: Option<Identity>) {
        let listeners: Vec<SessionListener> = {
            let mut inner = self.lock();
            inner.current.clone_from(&identity);
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(identity.clone());
        }
    }

    /// Register `listener` and deliver the current identity to it.
    pub fn subscribe(self: &Arc<Self>, listener: SessionListener) -> Subscription {
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.current.clone())
        };
        listener(current);

        let hub: Weak<Self> = Arc::downgrade(self);
        Subscription::new(move || {
            if let Some(hub) = hub.upgrade() {
                hub.remove(id);
            }
        })
    }

    fn remove(&self, id: u64) {
        self.lock().listeners.retain(|(lid, _)| *lid != id);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HubInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
