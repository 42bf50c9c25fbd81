//! Authentication and authorization core for the jobdesk API, plus the
//! service flows that exercise it against the external store contract.
//!
//! The HTTP layer and the relational store are collaborators, not part
//! of this crate: handlers call into [`flow`] with payloads they have
//! already deserialized, and the store is any implementation of the
//! traits in [`store`].

pub mod auth;
pub mod error;
pub mod flow;
pub mod store;
