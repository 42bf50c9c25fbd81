//! Shared foundation for the jobdesk workspace: error types, typed
//! identifiers, configuration loading, and the clock abstraction.

pub mod config;
pub mod error;
pub mod types;
pub mod util;
