//! Service flows consumed by request handlers.
//!
//! - `account`: registration, login, and request authentication
//! - `jobs`: guarded job and application operations
//!
//! Handlers hand these functions already-deserialized payloads and a
//! store implementation; the flows return the specific error kind and
//! leave status-code mapping to the transport.

pub mod account;
pub mod jobs;

pub use account::{LoginOutcome, login, register, subject_from_header};
pub use jobs::{
    applications_by_user, applications_for_job, apply_to_job, delete_job, get_job, list_jobs,
    post_job, search_jobs,
};
