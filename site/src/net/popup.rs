//! Federated sign-in popup protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth page opens `/auth/{provider}` in a popup window. The server runs
//! the OAuth code flow, trades the provider token for an identity credential,
//! and answers with a page that posts one [`PopupMessage`] back to the opener
//! before closing itself. Both crates use this type, so the wire shape lives
//! in one place.
//!
//! TRADE-OFFS
//! ==========
//! Closing is detected by polling `window.closed` because the opener gets no
//! event for it. The half-second interval only bounds how long a closed
//! popup takes to surface as `auth/popup-closed-by-user`. The result page
//! closes itself right after posting, so a poll can see the window closed
//! before the message event is dispatched; the flow waits one short grace
//! tick and checks for a late message before reporting the close.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use serde::{Deserialize, Serialize};

use super::identity::{Credential, ProviderKind};
use crate::state::auth::AuthError;

pub const POPUP_BLOCKED: &str = "auth/popup-blocked";
pub const POPUP_CLOSED: &str = "auth/popup-closed-by-user";
pub const INTERNAL_ERROR: &str = "auth/internal-error";
pub const INVALID_STATE: &str = "auth/invalid-state";
pub const OPERATION_NOT_ALLOWED: &str = "auth/operation-not-allowed";

#[cfg(feature = "hydrate")]
const POPUP_TARGET: &str = "initiative-auth";
#[cfg(feature = "hydrate")]
const POPUP_FEATURES: &str = "width=500,height=650";
#[cfg(feature = "hydrate")]
const CLOSED_POLL_MS: u32 = 500;
#[cfg(feature = "hydrate")]
const CLOSE_GRACE_MS: u32 = 100;

/// Message posted from the popup to `window.opener`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<Credential>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PopupMessage {
    /// Value of the `type` discriminator; other messages are ignored.
    pub const TYPE: &'static str = "initiative-auth";

    pub fn success(credential: Credential) -> Self {
        Self { kind: Self::TYPE.to_owned(), ok: true, credential: Some(credential), error: None }
    }

    pub fn failure(code: impl Into<String>) -> Self {
        Self { kind: Self::TYPE.to_owned(), ok: false, credential: None, error: Some(code.into()) }
    }

    pub fn is_ours(&self) -> bool {
        self.kind == Self::TYPE
    }

    /// # Errors
    ///
    /// Returns the carried error code, or `auth/internal-error` for a
    /// success message without a credential.
    pub fn into_result(self) -> Result<Credential, AuthError> {
        match (self.ok, self.credential) {
            (true, Some(credential)) => Ok(credential),
            _ => Err(AuthError::provider(self.error.unwrap_or_else(|| INTERNAL_ERROR.to_owned()))),
        }
    }
}

/// Same-origin path that starts the popup flow for `kind`.
pub fn start_path(kind: ProviderKind) -> String {
    format!("/auth/{}", kind.slug())
}

/// Parse a posted message payload, ignoring anything that is not ours.
pub fn parse_message(raw: &str) -> Option<PopupMessage> {
    serde_json::from_str::<PopupMessage>(raw).ok().filter(PopupMessage::is_ours)
}

/// Result of a finished popup flow: the message it posted, or the viewer
/// closing it when none arrived.
///
/// # Errors
///
/// Returns `auth/popup-closed-by-user` without a message, otherwise the
/// message's own error.
pub fn popup_outcome(message: Option<PopupMessage>) -> Result<Credential, AuthError> {
    match message {
        Some(message) => message.into_result(),
        None => Err(AuthError::provider(POPUP_CLOSED)),
    }
}

/// Open the popup at `url` and wait for its message or its closing.
#[cfg(feature = "hydrate")]
pub(crate) async fn run_popup_flow(url: &str) -> Result<Credential, AuthError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::future::{Either, select};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or_else(|| AuthError::unknown("window unavailable"))?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| AuthError::unknown(format!("origin unavailable: {e:?}")))?;
    let popup = window
        .open_with_url_and_target_and_features(url, POPUP_TARGET, POPUP_FEATURES)
        .ok()
        .flatten()
        .ok_or_else(|| AuthError::provider(POPUP_BLOCKED))?;

    let (tx, rx) = oneshot::channel::<PopupMessage>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |event: web_sys::MessageEvent| {
        if event.origin() != origin {
            return;
        }
        let Some(message) = event.data().as_string().as_deref().and_then(parse_message) else {
            return;
        };
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(message);
        }
    });
    window
        .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
        .map_err(|e| AuthError::unknown(format!("message listener failed: {e:?}")))?;

    let watch_closed = Box::pin(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(CLOSED_POLL_MS).await;
            if popup.closed().unwrap_or(true) {
                break;
            }
        }
    });
    let message = match select(rx, watch_closed).await {
        Either::Left((Ok(message), _)) => Some(message),
        Either::Left((Err(_), _)) => None,
        Either::Right(((), mut rx)) => {
            gloo_timers::future::TimeoutFuture::new(CLOSE_GRACE_MS).await;
            match rx.try_recv() {
                Ok(late) => late,
                Err(_) => None,
            }
        }
    };

    let _ = window.remove_event_listener_with_callback("message", on_message.as_ref().unchecked_ref());
    drop(on_message);

    popup_outcome(message)
}
