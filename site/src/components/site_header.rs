//! Top bar with brand link, theme toggle, and the session-aware access link.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every page. The right-hand control shows `SIGN OUT` for an
//! authenticated session and `ACCESS` otherwise; the two are never shown
//! together.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;

use crate::content::BRAND_TAG;
use crate::pages::session::PageSession;
use crate::state::auth::Session;
use crate::state::ui::UiState;

pub const ACCESS_LABEL: &str = "ACCESS";
pub const SIGN_OUT_LABEL: &str = "SIGN OUT";
pub const SIGNING_OUT_LABEL: &str = "SIGNING OUT...";

/// Which session control the header shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessControl {
    Access,
    SignOut { pending: bool },
}

impl AccessControl {
    pub fn for_session(session: &Session, signing_out: bool) -> Self {
        if session.is_authenticated() {
            Self::SignOut { pending: signing_out }
        } else {
            Self::Access
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Access => ACCESS_LABEL,
            Self::SignOut { pending: false } => SIGN_OUT_LABEL,
            Self::SignOut { pending: true } => SIGNING_OUT_LABEL,
        }
    }
}

#[component]
pub fn SiteHeader(page: PageSession) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let control = move || AccessControl::for_session(&page.session.get(), ui.get().signing_out);

    let on_sign_out = move |_| {
        if ui.get_untracked().signing_out {
            return;
        }
        let Some(controller) = page.controller() else {
            return;
        };
        ui.update(UiState::begin_sign_out);
        leptos::task::spawn_local(async move {
            let result = controller.sign_out().await;
            ui.update(|u| u.finish_sign_out(result.err().map(|e| e.to_string())));
        });
    };

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">{BRAND_TAG}</a>
            <span class="site-header__status">
                "// STATUS: " <span class="site-header__status-value">"RECRUITING_NEW_VOLUNTEERS"</span> " //"
            </span>
            <nav class="site-header__nav">
                <a href="/about" class="site-header__link">"ABOUT"</a>
                <button class="btn site-header__theme" on:click=on_toggle_theme title="Toggle theme">
                    {move || crate::util::dark_mode::toggle_label(ui.get().dark_mode)}
                </button>
                {move || match control() {
                    AccessControl::Access => {
                        view! { <a href="/auth" class="btn site-header__access">{ACCESS_LABEL}</a> }.into_any()
                    }
                    signed_in @ AccessControl::SignOut { pending } => {
                        view! {
                            <button class="btn site-header__sign-out" disabled=pending on:click=on_sign_out>
                                {signed_in.label()}
                            </button>
                        }
                            .into_any()
                    }
                }}
            </nav>
            <Show when=move || ui.get().notice.is_some()>
                <p class="site-header__notice" role="alert">
                    {move || ui.get().notice.unwrap_or_default()}
                    <button class="site-header__dismiss" on:click=move |_| ui.update(UiState::dismiss_notice)>
                        "×"
                    </button>
                </p>
            </Show>
        </header>
    }
}
