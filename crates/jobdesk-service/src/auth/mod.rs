//! Authentication and authorization core.
//!
//! ## Module Organization
//!
//! - `bearer`: bearer token extraction from the Authorization header
//! - `password`: password hashing and verification with Argon2
//! - `policy`: resource-ownership decision rules
//! - `token`: signed, time-bounded session tokens
//!
//! All four pieces are stateless with respect to request-scoped input.
//! The only long-lived value is the signing secret inside
//! [`token::TokenCodec`], which is immutable for the process lifetime
//! and safe to share by reference across concurrent requests.

pub mod bearer;
pub mod password;
pub mod policy;
pub mod token;

// Re-export commonly used items at module level
pub use bearer::extract_bearer;
pub use password::{hash_password, verify_password};
pub use policy::{
    AuthzResult, can_apply, can_modify, can_view_applications_for_job, require_subject,
};
pub use token::TokenCodec;
