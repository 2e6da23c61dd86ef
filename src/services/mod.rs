//! Upstream integrations used by the popup sign-in routes.

pub mod identity;
pub mod oauth;
pub mod popup;
