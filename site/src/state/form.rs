//! Relay-backed form submissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The partner inquiry and contact forms are declared as static `FormSpec`s
//! and rendered by one generic component. `FormSubmitter` owns the
//! submission lifecycle for a mounted form:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ Succeeded ──(5 s)──▶ Idle
//!                              └─▶ Failed(errors) ──submit──▶ Submitting
//! ```
//!
//! Only required-field and email-shape checks run locally; the relay does
//! the rest. Nothing is retried or queued.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::config::RelayConfig;
use crate::net::relay::{FieldError, RelayChannel, RelayFailure, RelayHandle};
use crate::util::store::StateStore;

/// How long a success message stays up before the form returns to idle.
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;

pub const FIELD_REQUIRED: &str = "This field is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
    /// `(value, label)` pairs; the first entry is the empty placeholder.
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub channel: RelayChannel,
    /// Prefix for element ids, keeps ids unique when two forms share a page.
    pub id_prefix: &'static str,
    pub fields: &'static [FieldSpec],
    pub submit_label: &'static str,
    pub pending_label: &'static str,
    pub success_message: &'static str,
    /// Keep the submit control disabled after success until the message clears.
    pub lock_after_success: bool,
}

impl FormSpec {
    pub fn input_id(&self, field: &FieldSpec) -> String {
        format!("{}-{}", self.id_prefix, field.name)
    }
}

pub const INTEREST_OPTIONS: &[(&str, &str)] = &[
    ("", "-- Select Partnership Type --"),
    ("project", "Project Collaboration"),
    ("resource", "Resource Sharing"),
    ("research", "Research Partnership"),
    ("community", "Community Integration"),
    ("probono", "Pro Bono Expertise"),
    ("other", "Other"),
];

pub static PARTNER_FORM: FormSpec = FormSpec {
    channel: RelayChannel::PartnerInquiry,
    id_prefix: "partner",
    fields: &[
        FieldSpec { name: "org", label: "ORGANIZATION:", kind: FieldKind::Text, required: true, placeholder: "" },
        FieldSpec {
            name: "contact_person",
            label: "CONTACT_NAME:",
            kind: FieldKind::Text,
            required: true,
            placeholder: "",
        },
        FieldSpec { name: "email", label: "CONTACT_EMAIL:", kind: FieldKind::Email, required: true, placeholder: "" },
        FieldSpec {
            name: "interest",
            label: "INTEREST_AREA:",
            kind: FieldKind::Select(INTEREST_OPTIONS),
            required: true,
            placeholder: "",
        },
        FieldSpec {
            name: "message",
            label: "BRIEF_PROPOSAL:",
            kind: FieldKind::TextArea,
            required: true,
            placeholder: "// How can we collaborate effectively?",
        },
    ],
    submit_label: "Request Collaboration",
    pending_label: "Submitting...",
    success_message: "Thanks for showing your interest! We'll get back to you soon.",
    lock_after_success: true,
};

pub static CONTACT_FORM: FormSpec = FormSpec {
    channel: RelayChannel::Contact,
    id_prefix: "contact",
    fields: &[
        FieldSpec { name: "email", label: "Email:", kind: FieldKind::Email, required: false, placeholder: "" },
        FieldSpec { name: "message", label: "Message:", kind: FieldKind::TextArea, required: false, placeholder: "" },
    ],
    submit_label: "Submit",
    pending_label: "Submitting...",
    success_message: "Thank you for your message! We will get back to you soon.",
    lock_after_success: false,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(RelayFailure),
}

/// Field values plus lifecycle status of one mounted form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub fields: BTreeMap<String, String>,
    pub status: SubmissionStatus,
    /// Count of successful sends; ties a success-display timer to its send.
    pub generation: u64,
}

impl FormSubmission {
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        self.fields.insert(name.to_owned(), value);
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    pub fn failure(&self) -> Option<&RelayFailure> {
        match &self.status {
            SubmissionStatus::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Whether the submit control should be disabled for `spec`.
    pub fn locks_submit(&self, spec: &FormSpec) -> bool {
        self.is_submitting() || (spec.lock_after_success && self.is_succeeded())
    }
}

/// Accept `local@domain` with non-empty sides and exactly one `@`.
pub fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace)
    )
}

/// Browser-equivalent constraint checks for `spec`.
pub fn validate_fields(spec: &FormSpec, fields: &BTreeMap<String, String>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in spec.fields {
        let value = fields.get(field.name).map_or("", |v| v.trim());
        if value.is_empty() {
            if field.required {
                errors.push(FieldError { field: field.name.to_owned(), message: FIELD_REQUIRED.to_owned() });
            }
            continue;
        }
        if field.kind == FieldKind::Email && !looks_like_email(value) {
            errors.push(FieldError { field: field.name.to_owned(), message: EMAIL_INVALID.to_owned() });
        }
    }
    errors
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered; pass `generation` to [`FormSubmitter::acknowledge`].
    Sent { generation: u64 },
    /// A submission was already in flight; nothing was sent.
    Busy,
}

#[derive(Clone)]
pub struct FormSubmitter<S> {
    spec: &'static FormSpec,
    relay: RelayHandle,
    relay_config: RelayConfig,
    store: S,
}

impl<S> FormSubmitter<S>
where
    S: StateStore<FormSubmission>,
{
    pub fn new(spec: &'static FormSpec, relay: RelayHandle, relay_config: RelayConfig, store: S) -> Self {
        Self { spec, relay, relay_config, store }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn submission(&self) -> FormSubmission {
        self.store.snapshot()
    }

    pub fn set_field(&self, name: &str, value: String) {
        self.store.modify(|s| s.set_field(name, value));
    }

    /// Validate, then deliver the current field values to the relay.
    ///
    /// On success the fields are cleared; on failure they are kept for the
    /// viewer to correct.
    ///
    /// # Errors
    ///
    /// Returns local constraint errors or the relay's rejection.
    pub async fn submit(&self) -> Result<SubmitOutcome, RelayFailure> {
        let current = self.store.snapshot();
        if current.is_submitting() {
            return Ok(SubmitOutcome::Busy);
        }

        let errors = validate_fields(self.spec, &current.fields);
        if !errors.is_empty() {
            let failure = RelayFailure::fields(errors);
            let status = SubmissionStatus::Failed(failure.clone());
            self.store.modify(|s| s.status = status);
            return Err(failure);
        }

        self.store.modify(|s| s.status = SubmissionStatus::Submitting);
        let form_id = self.spec.channel.form_id(&self.relay_config);
        match self.relay.submit(form_id, &current.fields).await {
            Ok(()) => {
                let generation = current.generation + 1;
                self.store.replace(FormSubmission {
                    fields: BTreeMap::new(),
                    status: SubmissionStatus::Succeeded,
                    generation,
                });
                Ok(SubmitOutcome::Sent { generation })
            }
            Err(failure) => {
                let status = SubmissionStatus::Failed(failure.clone());
                self.store.modify(|s| s.status = status);
                Err(failure)
            }
        }
    }

    /// Clear the success message shown for send `generation`.
    ///
    /// A no-op once a later send has replaced it.
    pub fn acknowledge(&self, generation: u64) {
        self.store.modify(|s| {
            if s.is_succeeded() && s.generation == generation {
                s.status = SubmissionStatus::Idle;
            }
        });
    }
}
