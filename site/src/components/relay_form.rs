//! Generic relay-backed form driven by a static `FormSpec`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used for the partner inquiry form on the home page and the contact form
//! on the about page. Field values and submission status live in one
//! `RwSignal<FormSubmission>` written through `FormSubmitter`.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::net::relay::RelayHandle;
use crate::state::form::{FieldKind, FieldSpec, FormSpec, FormSubmission, FormSubmitter, SubmitOutcome};

#[component]
pub fn RelayForm(spec: &'static FormSpec) -> impl IntoView {
    let relay = expect_context::<RelayHandle>();
    let config = expect_context::<SiteConfig>();
    let submission = RwSignal::new(FormSubmission::default());
    let submitter = StoredValue::new(FormSubmitter::new(spec, relay, config.relay, submission));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submission.with_untracked(|s| s.locks_submit(spec)) {
            return;
        }
        let Some(form) = submitter.try_get_value() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match form.submit().await {
                #[cfg(feature = "hydrate")]
                Ok(SubmitOutcome::Sent { generation }) => {
                    gloo_timers::future::TimeoutFuture::new(crate::state::form::SUCCESS_DISPLAY_MS).await;
                    form.acknowledge(generation);
                }
                #[cfg(not(feature = "hydrate"))]
                Ok(SubmitOutcome::Sent { .. }) => {}
                Ok(SubmitOutcome::Busy) => {}
                Err(failure) => warn!("{} form rejected: {failure}", form.spec().id_prefix),
            }
        });
    };

    let fields = spec.fields.iter().map(|field| field_row(spec, field, submission)).collect_view();

    let general_errors = move || {
        submission.with(|s| s.failure().map(|f| f.general.clone()).unwrap_or_default())
    };

    view! {
        <form class=format!("relay-form relay-form--{}", spec.id_prefix) on:submit=on_submit novalidate=true>
            {fields}
            <button
                type="submit"
                class="btn relay-form__submit"
                disabled=move || submission.with(|s| s.locks_submit(spec))
            >
                {move || {
                    if submission.with(FormSubmission::is_submitting) { spec.pending_label } else { spec.submit_label }
                }}
            </button>
            <Show when=move || submission.with(FormSubmission::is_succeeded)>
                <p class="relay-form__success" role="status">{spec.success_message}</p>
            </Show>
            {move || {
                general_errors()
                    .into_iter()
                    .map(|message| view! { <p class="relay-form__banner" role="alert">{message}</p> })
                    .collect_view()
            }}
        </form>
    }
}

fn field_row(spec: &'static FormSpec, field: &'static FieldSpec, submission: RwSignal<FormSubmission>) -> impl IntoView {
    let id = spec.input_id(field);
    let name = field.name;
    let value = move || submission.with(|s| s.value(name).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        submission.update(|s| s.set_field(name, next));
    };
    let error = move || {
        submission.with(|s| s.failure().and_then(|f| f.for_field(name)).map(str::to_owned))
    };

    let control = match field.kind {
        FieldKind::Text | FieldKind::Email => {
            let input_type = if field.kind == FieldKind::Email { "email" } else { "text" };
            view! {
                <input
                    class="relay-form__input"
                    type=input_type
                    id=id.clone()
                    name=name
                    required=field.required
                    placeholder=field.placeholder
                    prop:value=value
                    on:input=on_input
                />
            }
                .into_any()
        }
        FieldKind::TextArea => view! {
            <textarea
                class="relay-form__input"
                id=id.clone()
                name=name
                rows="4"
                required=field.required
                placeholder=field.placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }
            .into_any(),
        FieldKind::Select(options) => view! {
            <select
                class="relay-form__input"
                id=id.clone()
                name=name
                required=field.required
                prop:value=value
                on:change=on_input
            >
                {options
                    .iter()
                    .map(|(option_value, option_label)| view! { <option value=*option_value>{*option_label}</option> })
                    .collect_view()}
            </select>
        }
            .into_any(),
    };

    view! {
        <div class="relay-form__row">
            <label class="relay-form__label" for=id>{field.label}</label>
            {control}
            {move || error().map(|message| view! { <p class="relay-form__error" role="alert">{message}</p> })}
        </div>
    }
}
