//! Resource-ownership decision rules.
//!
//! Handlers call these with the authenticated subject (recovered from a
//! session token) and the resource's recorded owner, both supplied per
//! request; the policy stores nothing and never touches a transport.
//! Denials distinguish `NotAuthenticated` (no valid credential) from
//! `Forbidden` (authenticated but not the owner) so the caller can pick
//! the right status code.

use jobdesk_core::types::SubjectId;

use crate::error::{ServiceError, ServiceResult};

/// Result of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthzResult {
    /// Access is allowed.
    Allowed,
    /// Access is denied.
    Denied,
}

impl AuthzResult {
    /// Returns `true` if access is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Convert to a `Result`, returning `Err(ServiceError::Forbidden)`
    /// if denied.
    ///
    /// ## Errors
    /// Returns `Forbidden` carrying `denial` if access is denied.
    pub fn require(self, denial: &'static str) -> ServiceResult<()> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied => Err(ServiceError::Forbidden(denial)),
        }
    }
}

const fn decide(allowed: bool) -> AuthzResult {
    if allowed {
        AuthzResult::Allowed
    } else {
        AuthzResult::Denied
    }
}

/// ## Summary
/// Requires an authenticated subject, mapping an absent one to
/// `NotAuthenticated`. Operations that need no ownership comparison
/// (listing one's own applications) gate on this alone.
///
/// ## Errors
/// Returns `NotAuthenticated` if `subject` is `None`.
pub fn require_subject(subject: Option<SubjectId>) -> ServiceResult<SubjectId> {
    subject.ok_or(ServiceError::NotAuthenticated)
}

/// Only the owner may mutate a resource. Governs job deletion.
#[must_use]
pub fn can_modify(subject: SubjectId, owner: SubjectId) -> AuthzResult {
    decide(subject == owner)
}

/// An owner may not apply to their own posting.
#[must_use]
pub fn can_apply(subject: SubjectId, owner: SubjectId) -> AuthzResult {
    decide(subject != owner)
}

/// Only the job owner may list applications to that job.
#[must_use]
pub fn can_view_applications_for_job(subject: SubjectId, owner: SubjectId) -> AuthzResult {
    decide(subject == owner)
}
