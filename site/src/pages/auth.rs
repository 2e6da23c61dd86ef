//! Sign-up / sign-in screen backed by the hosted identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! One canonical auth page. Email + password go through
//! `SessionController::submit_credentials`; the Google and GitHub buttons
//! run the popup consent flow. Field errors come from local validation,
//! the general error line from the session's last provider error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_meta::Title;

use super::session::use_page_session;
use crate::components::site_header::SiteHeader;
use crate::net::identity::ProviderKind;
use crate::state::auth::{AuthError, CredentialErrors, SessionStatus};
use crate::state::auth_controller::CredentialMode;

pub const POPUP_ADVISORY: &str = "Disable popup blocker for best experience";

pub fn heading(mode: CredentialMode) -> &'static str {
    match mode {
        CredentialMode::SignUp => "SIGN_UP",
        CredentialMode::SignIn => "SIGN_IN",
    }
}

fn verb(mode: CredentialMode) -> &'static str {
    match mode {
        CredentialMode::SignUp => "SIGN UP",
        CredentialMode::SignIn => "SIGN IN",
    }
}

pub fn submit_label(mode: CredentialMode, pending: bool) -> &'static str {
    match (pending, mode) {
        (true, _) => "PROCESSING...",
        (false, CredentialMode::SignUp) => "REGISTER",
        (false, CredentialMode::SignIn) => "AUTHENTICATE",
    }
}

pub fn divider_label(mode: CredentialMode) -> String {
    format!("// OR {} WITH //", verb(mode))
}

pub fn federated_label(mode: CredentialMode, kind: ProviderKind) -> String {
    format!("{} WITH {}", verb(mode), kind.label())
}

/// `(prompt, toggle button text)` under the form.
pub fn toggle_prompt(mode: CredentialMode) -> (&'static str, &'static str) {
    match mode {
        CredentialMode::SignUp => ("Already registered?", "Sign In"),
        CredentialMode::SignIn => ("Need an account?", "Sign Up"),
    }
}

/// Field errors to show after a credential submission failed.
pub fn field_errors_for(error: &AuthError) -> CredentialErrors {
    error.field_errors().cloned().unwrap_or_default()
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let page = use_page_session();
    let mode = RwSignal::new(CredentialMode::SignUp);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(CredentialErrors::default());

    let pending = move || page.session.with(|s| s.is_pending());
    let general_error = move || {
        page.session.with(|s| (s.status() == SessionStatus::Error).then(|| s.last_error().unwrap_or_default().to_owned()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if page.session.with_untracked(|s| s.is_pending()) {
            return;
        }
        let Some(controller) = page.controller() else {
            return;
        };
        let current_mode = mode.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        field_errors.set(CredentialErrors::default());
        leptos::task::spawn_local(async move {
            if let Err(e) = controller.submit_credentials(current_mode, &email_value, &password_value).await {
                drop(field_errors.try_set(field_errors_for(&e)));
            }
        });
    };

    let federated = move |kind: ProviderKind| {
        move |_| {
            if page.session.with_untracked(|s| s.is_pending()) {
                return;
            }
            let Some(controller) = page.controller() else {
                return;
            };
            field_errors.set(CredentialErrors::default());
            leptos::task::spawn_local(async move {
                if let Err(e) = controller.sign_in_federated(kind).await {
                    leptos::logging::log!("{kind} sign-in failed: {e}");
                }
            });
        }
    };

    view! {
        <Title text="Access | AI for Good Initiative"/>
        <div class="site auth-page">
            <SiteHeader page=page/>
            <main class="auth-card">
                <h2 class="auth-card__heading">{move || heading(mode.get())}</h2>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__label" for="auth-email">"EMAIL:"</label>
                    <input
                        class="auth-form__input"
                        type="email"
                        id="auth-email"
                        name="email"
                        placeholder="user@domain.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().email.map(|m| view! { <p class="auth-form__error">{m}</p> })}

                    <label class="auth-form__label" for="auth-password">"PASSWORD:"</label>
                    <input
                        class="auth-form__input"
                        type="password"
                        id="auth-password"
                        name="password"
                        placeholder="********"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().password.map(|m| view! { <p class="auth-form__error">{m}</p> })}

                    {move || general_error().map(|m| view! { <p class="auth-form__error auth-form__error--general" role="alert">{m}</p> })}

                    <button type="submit" class="btn auth-form__submit" disabled=pending>
                        {move || submit_label(mode.get(), pending())}
                    </button>
                </form>

                <p class="auth-card__divider">{move || divider_label(mode.get())}</p>
                <div class="auth-card__federated">
                    {ProviderKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class=format!("btn auth-card__provider auth-card__provider--{}", kind.slug())
                                    disabled=pending
                                    on:click=federated(kind)
                                >
                                    {move || federated_label(mode.get(), kind)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <p class="auth-card__toggle">
                    "// " {move || toggle_prompt(mode.get()).0} " "
                    <button class="auth-card__toggle-btn" type="button" on:click=move |_| {
                        field_errors.set(CredentialErrors::default());
                        mode.update(|m| *m = m.toggled());
                    }>
                        {move || toggle_prompt(mode.get()).1}
                    </button>
                    " //"
                </p>
                <p class="auth-card__advisory">{POPUP_ADVISORY}</p>
            </main>
        </div>
    }
}
