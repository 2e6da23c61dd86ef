//! Client-side state models and controllers.
//!
//! ARCHITECTURE
//! ============
//! `auth` holds the session value type and credential validation,
//! `auth_controller` drives it against the identity provider, `form` owns
//! relay submissions, and `ui` carries header chrome state.

pub mod auth;
pub mod auth_controller;
pub mod form;
pub mod ui;
