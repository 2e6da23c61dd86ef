//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::net::firebase::FirebaseIdentity;
use crate::net::identity::IdentityHandle;
use crate::net::relay::{FormspreeRelay, RelayHandle};
use crate::pages::{about::AboutPage, auth::AuthPage, home::HomePage};
use crate::state::ui::UiState;
use crate::util::dark_mode;

pub const STYLESHEET_HREF: &str = "/assets/site.css";

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is embedded as inert JSON so the hydrated client builds the same
/// provider handles the server rendered with.
pub fn shell(options: LeptosOptions, config: SiteConfig) -> impl IntoView {
    let embedded = config.to_embedded_json();
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=dark_mode::theme_name(UiState::default().dark_mode)>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=CONFIG_ELEMENT_ID type="application/json" inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config=config/>
            </body>
        </html>
    }
}

/// Build the init-once provider handles for `config`.
pub fn provider_handles(config: &SiteConfig) -> (IdentityHandle, RelayHandle) {
    let identity: IdentityHandle = Arc::new(FirebaseIdentity::new(config.identity.clone()));
    let relay: RelayHandle = Arc::new(FormspreeRelay::default());
    (identity, relay)
}

/// Root application component.
///
/// Provides the identity and relay handles, the public config and the UI
/// chrome state, then sets up client-side routing.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let (identity, relay) = provider_handles(&config);
    let ui = RwSignal::new(UiState::default());

    provide_context(identity);
    provide_context(relay);
    provide_context(config);
    provide_context(ui);

    Effect::new(move |_| {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>
        <Title text="AI for Good Initiative"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
            </Routes>
        </Router>
    }
}
