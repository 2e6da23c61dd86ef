//! Question/answer list.

use leptos::prelude::*;

use crate::content::Entry;

#[component]
pub fn FaqList(entries: &'static [Entry]) -> impl IntoView {
    view! {
        <div class="faq-list">
            {entries
                .iter()
                .map(|entry| {
                    view! {
                        <div class="faq-list__item">
                            <h4 class="faq-list__question">{entry.title}</h4>
                            <p class="faq-list__answer">{entry.body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
