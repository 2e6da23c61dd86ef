//! Auth-session state for the current viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the session-aware header and the auth page to decide what to
//! render; written only by `SessionController`.
//!
//! DESIGN
//! ======
//! `Session` fields are private and every value is built through a
//! transition constructor. That keeps the identity/status pairing legal by
//! construction: `Authenticated` always carries an identity, every other
//! status carries none.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use crate::net::identity::Identity;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";

/// Authentication status of the viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Provider has not reported yet.
    #[default]
    Unknown,
    /// A sign-in or sign-up call is in flight.
    Authenticating,
    Authenticated,
    Unauthenticated,
    /// The last sign-in or sign-up attempt failed.
    Error,
}

/// The viewer's session as seen by one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    status: SessionStatus,
    last_error: Option<String>,
}

impl Session {
    /// State reported by the provider's session stream.
    #[must_use]
    pub fn observed(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Self::authenticated(identity),
            None => Self::signed_out(),
        }
    }

    #[must_use]
    pub fn authenticating() -> Self {
        Self { identity: None, status: SessionStatus::Authenticating, last_error: None }
    }

    #[must_use]
    pub fn authenticated(identity: Identity) -> Self {
        Self { identity: Some(identity), status: SessionStatus::Authenticated, last_error: None }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { identity: None, status: SessionStatus::Error, last_error: Some(message.into()) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { identity: None, status: SessionStatus::Unauthenticated, last_error: None }
    }

    /// Same session with any failure message dropped; `Error` falls back to
    /// `Unauthenticated`.
    #[must_use]
    pub fn cleared_error(&self) -> Self {
        match self.status {
            SessionStatus::Error => Self::signed_out(),
            _ => Self { last_error: None, ..self.clone() },
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn is_pending(&self) -> bool {
        self.status == SessionStatus::Authenticating
    }
}

/// Field-level credential validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl CredentialErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl fmt::Display for CredentialErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.email, self.password].into_iter().flatten().collect();
        f.write_str(&parts.join("; "))
    }
}

/// Failure of an auth operation.
///
/// Provider messages are carried verbatim; `Display` is the text shown to
/// the viewer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(CredentialErrors),
    #[error("{message}")]
    ProviderRejected { message: String },
    #[error("{message}")]
    Network { message: String },
    #[error("{message}")]
    Unknown { message: String },
}

impl AuthError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderRejected { message: message.into() }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown { message: message.into() }
    }

    /// Error for provider calls made where no browser is available (SSR).
    pub(crate) fn unavailable() -> Self {
        Self::unknown("not available on server")
    }

    /// Field-level errors when this is a validation failure.
    pub fn field_errors(&self) -> Option<&CredentialErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Credentials that passed local validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validate email/password locally before any provider call.
///
/// The email is trimmed; the password is taken as typed.
///
/// # Errors
///
/// Returns the per-field messages when either field is rejected.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, CredentialErrors> {
    let email = email.trim();
    let mut errors = CredentialErrors::default();
    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED);
    }
    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED);
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some(PASSWORD_TOO_SHORT);
    }

    if errors.is_empty() {
        Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}
