//! Integration test crate for the jobdesk workspace.
//!
//! Re-exports the workspace crates under one roof so integration tests
//! can reach everything through a single dependency.

pub use jobdesk_core as core;
pub use jobdesk_service as service;
