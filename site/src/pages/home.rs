//! Landing page: mission, ways to get involved, donation tiers, partner form.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::session::use_page_session;
use crate::components::faq_list::FaqList;
use crate::components::relay_form::RelayForm;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::config::SiteConfig;
use crate::content::{self, donation_tile};
use crate::state::form::PARTNER_FORM;

#[component]
pub fn HomePage() -> impl IntoView {
    let page = use_page_session();
    let links = expect_context::<SiteConfig>().links;

    let bullet_list = |items: &'static [&'static str]| {
        items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()
    };

    view! {
        <Title text="AI for Good Initiative"/>
        <Meta name="description" content=content::SITE_DESCRIPTION/>
        <div class="site home-page">
            <SiteHeader page=page/>

            <section class="hero">
                <h1 class="hero__title">{content::HERO_TITLE}</h1>
                <p class="hero__tagline">{content::HERO_TAGLINE}</p>
            </section>

            <section class="purpose">
                <h2>"OUR_ PURPOSE:"</h2>
                <p>{content::PURPOSE}</p>
            </section>

            <section class="focus-areas">
                {content::FOCUS_AREAS
                    .iter()
                    .map(|area| view! {
                        <div class="focus-areas__item">
                            <h2>{area.title}</h2>
                            <p>{area.body}</p>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="get-involved">
                <h3>"GET_INVOLVED:"</h3>
                <div class="get-involved__grid">
                    {content::GET_INVOLVED
                        .iter()
                        .map(|anchor| view! {
                            <a class="get-involved__tile" href=anchor.href aria-label=anchor.label>{anchor.label}</a>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="volunteer-execute" class="volunteer">
                <h3>"VOLUNTEER_WITH_US"</h3>
                <p>{content::VOLUNTEER_PITCH}</p>
                <h4>"SKILLS_NEEDED:"</h4>
                <ul class="volunteer__skills">{bullet_list(content::SKILLS_NEEDED)}</ul>
                <p>
                    "See current needs on " <a href="#active-projects">"Active Projects"</a>
                    " or register your general interest below."
                </p>
                <a class="btn" href=links.volunteer_form_url.clone() target="_blank" rel="noopener noreferrer">
                    "REGISTER_AS_VOLUNTEER"
                </a>
            </section>

            <section id="submit-op" class="submit-idea">
                <h3>"SUBMIT_YOUR_IDEA"</h3>
                <p>{content::IDEA_PITCH}</p>
                <h4>"WHAT_TO_INCLUDE:"</h4>
                <ul>{bullet_list(content::IDEA_CHECKLIST)}</ul>
                <p class="muted">"// Ideas are reviewed by the community. Feasible projects are scoped and volunteer teams formed. //"</p>
                <a class="btn" href=links.idea_form_url.clone() target="_blank" rel="noopener noreferrer">
                    "SUBMIT_IDEA_FORM"
                </a>
            </section>

            <section id="active-projects" class="projects">
                <h3>"ACTIVE_PROJECTS"</h3>
                <div class="projects__grid">
                    {content::ACTIVE_PROJECTS
                        .iter()
                        .map(|project| {
                            let volunteer_url = links.volunteer_form_url.clone();
                            view! {
                                <div class="projects__card">
                                    <h4>{project.title}</h4>
                                    <p>{project.summary}</p>
                                    <p class="projects__seeking">"// SEEKING //"</p>
                                    <ul>{bullet_list(project.roles)}</ul>
                                    <a href=volunteer_url target="_blank" rel="noopener noreferrer">"VOLUNTEER_FOR_THIS"</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="fund-relay" class="donate">
                <h3>"SUPPORT_OUR_WORK"</h3>
                <p>{content::DONATION_PITCH}</p>
                <h4>"WHERE_FUNDS_GO:"</h4>
                <ul class="donate__uses">
                    {content::FUND_USES.iter().map(|item| view! { <li>"-> " {*item}</li> }).collect_view()}
                </ul>
                <div class="donate__tiers">
                    {content::DONATION_TIERS
                        .iter()
                        .map(|tier| {
                            let (amount, caption) = donation_tile(*tier);
                            view! {
                                <a class="donate__tile" href="#fund-relay">
                                    <span class="donate__amount">{amount}</span>
                                    <span class="donate__caption">{caption}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <h4>"DONATION_PLATFORMS:"</h4>
                <div class="donate__platforms">
                    {content::DONATION_PLATFORMS
                        .iter()
                        .map(|platform| view! { <span class="donate__platform">{*platform}</span> })
                        .collect_view()}
                </div>
                <p class="muted">"// We'll soon be accepting sponsorships. //"</p>
            </section>

            <section id="partner-req" class="partner">
                <h3>"PARTNER_WITH_US"</h3>
                <p>{content::PARTNER_PITCH}</p>
                <h4>"WAYS_TO_PARTNER:"</h4>
                <ul>
                    {content::PARTNER_WAYS
                        .iter()
                        .map(|way| view! { <li><strong>{way.title}</strong> " " {way.body}</li> })
                        .collect_view()}
                </ul>
                <div class="partner__collaborators">
                    {content::COLLABORATORS.iter().map(|name| view! { <span>{*name}</span> }).collect_view()}
                </div>
                <h4>"INITIATE_DIALOGUE:"</h4>
                <RelayForm spec=&PARTNER_FORM/>
            </section>

            <section id="faq-stream" class="faq">
                <h3>"COMMON_QUERIES"</h3>
                <FaqList entries=content::HOME_FAQ/>
            </section>

            <SiteFooter/>
        </div>
    }
}
