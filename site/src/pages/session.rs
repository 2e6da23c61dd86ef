//! Per-page session wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each routed page calls [`use_page_session`] once. It builds a
//! `SessionController` over a page-local `RwSignal<Session>`, starts
//! observing the shared identity provider after hydration, and releases the
//! observation when the page's reactive owner is cleaned up.
//!
//! TRADE-OFFS
//! ==========
//! Observation starts inside an effect, so the server always renders the
//! `Unknown` session and hydration never mismatches. The price is one frame
//! of the signed-out chrome for a returning viewer.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::identity::IdentityHandle;
use crate::state::auth::Session;
use crate::state::auth_controller::{Confirm, Navigate, SessionController, SessionObserver};

pub type PageController = SessionController<RwSignal<Session>>;

/// Session signal plus the controller that writes it.
#[derive(Clone, Copy)]
pub struct PageSession {
    pub session: RwSignal<Session>,
    controller: StoredValue<PageController, LocalStorage>,
}

impl PageSession {
    /// The page's controller, or `None` once the page is torn down.
    pub fn controller(&self) -> Option<PageController> {
        self.controller.try_get_value()
    }
}

/// Blocking yes/no prompt through `window.confirm`.
fn confirm_with_viewer(prompt: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prompt;
        false
    }
}

pub fn use_page_session() -> PageSession {
    let provider = expect_context::<IdentityHandle>();
    let session = RwSignal::new(Session::default());

    let router_navigate = use_navigate();
    let navigate: Navigate = Rc::new(move |path: &str| router_navigate(path, NavigateOptions::default()));
    let confirm: Confirm = Rc::new(confirm_with_viewer);

    let controller = SessionController::new(provider, session, navigate, confirm);
    let observing = controller.clone();
    let observer = StoredValue::new_local(None::<SessionObserver>);

    Effect::new(move |_| {
        if observer.with_value(Option::is_none) {
            observer.set_value(Some(observing.observe()));
        }
    });
    on_cleanup(move || {
        observer.try_update_value(|guard| drop(guard.take()));
    });

    PageSession { session, controller: StoredValue::new_local(controller) }
}
