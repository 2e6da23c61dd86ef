//! About page: mission, vision, team, partners, contact form.

use leptos::prelude::*;
use leptos_meta::Title;

use super::session::use_page_session;
use crate::components::faq_list::FaqList;
use crate::components::relay_form::RelayForm;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::content::{self, Person};
use crate::state::form::CONTACT_FORM;

fn people(list: &'static [Person]) -> impl IntoView {
    list.iter()
        .map(|person| view! { <li><strong>{person.name}</strong> " - " {person.role}</li> })
        .collect_view()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let page = use_page_session();

    view! {
        <Title text="About | AI for Good Initiative"/>
        <div class="site about-page">
            <SiteHeader page=page/>
            <h1 class="about-page__title">"AI for Good Initiative"</h1>

            <section class="about-page__section">
                <p>{content::ABOUT_INTRO}</p>
            </section>

            <section class="about-page__section">
                <h2>"Our Mission"</h2>
                <p>{content::MISSION}</p>
            </section>

            <section class="about-page__section">
                <h2>"Our Vision"</h2>
                <p>{content::VISION}</p>
            </section>

            <section class="about-page__section">
                <h2>"What We Do"</h2>
                <p>"We engage in a variety of activities and projects, including:"</p>
                <ul>{content::WHAT_WE_DO.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
            </section>

            <section class="about-page__section">
                <h2>"Our Impact"</h2>
                <p>"Our work has led to significant advancements and positive outcomes, including:"</p>
                <ul>{content::IMPACT.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
            </section>

            <section class="about-page__section">
                <h2>"Team and Advisors"</h2>
                <h3>"Our Team"</h3>
                <ul>{people(content::TEAM)}</ul>
                <h3>"Our Advisors"</h3>
                <ul>{people(content::ADVISORS)}</ul>
            </section>

            <section class="about-page__section">
                <h2>"Partners and Collaborators"</h2>
                <p>"We are proud to collaborate with the following organizations:"</p>
                <ul>{people(content::PARTNERS)}</ul>
            </section>

            <section class="about-page__section" id="contact">
                <h2>"Contact Us"</h2>
                <RelayForm spec=&CONTACT_FORM/>
            </section>

            <section class="about-page__section">
                <h2>"FAQ"</h2>
                <FaqList entries=content::ABOUT_FAQ/>
            </section>

            <SiteFooter/>
        </div>
    }
}
