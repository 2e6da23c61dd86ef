//! Footer link strip.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

use crate::config::{ExternalLinks, SiteConfig};
use crate::content::{FOOTER_LINKS, LinkTarget};

/// Resolve a footer link to `(href, opens_new_tab)`.
pub fn resolve(target: LinkTarget, links: &ExternalLinks) -> (String, bool) {
    match target {
        LinkTarget::Volunteer => (links.volunteer_form_url.clone(), true),
        LinkTarget::Idea => (links.idea_form_url.clone(), true),
        LinkTarget::GitHub => (links.github_url.clone(), true),
        LinkTarget::Anchor(href) => (href.to_owned(), false),
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    let links = FOOTER_LINKS
        .iter()
        .map(|(label, target)| {
            let (href, external) = resolve(*target, &config.links);
            let target_attr = external.then_some("_blank");
            let rel = external.then_some("noopener noreferrer");
            view! {
                <a class="site-footer__link" href=href target=target_attr rel=rel>
                    "[" {*label} "]"
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="site-footer">
            <p class="site-footer__line">"// AI FOR GOOD INITIATIVE // Non-Profit Collective //"</p>
            <div class="site-footer__links">{links}</div>
            <p class="site-footer__end">"// END_TRANSMISSION //"</p>
        </footer>
    }
}
