//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own session controller through `session` and delegates
//! rendering details to `components`.

pub mod about;
pub mod auth;
pub mod home;
pub mod session;
