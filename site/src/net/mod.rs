//! Network adapters for the hosted identity provider and form relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the provider contract and session hub, `firebase`
//! implements it over the Identity Toolkit REST API, `popup` carries the
//! federated sign-in handshake, and `relay` posts form submissions.

pub mod firebase;
pub mod identity;
pub mod popup;
pub mod relay;
