//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared site chrome and the relay forms while
//! reading shared state from Leptos context providers.

pub mod faq_list;
pub mod relay_form;
pub mod site_footer;
pub mod site_header;
