use thiserror::Error;

/// Service layer errors - the full credential/token/ownership taxonomy.
///
/// Every kind is terminal for the current request; nothing here is
/// retried. The calling transport maps kinds to status codes:
/// credential and token failures reject as unauthenticated, `Forbidden`
/// rejects as forbidden, and `Hashing`/`DuplicateUsername` surface as
/// generic failures with no secret detail.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    CoreError(#[from] jobdesk_core::error::CoreError),

    /// The Authorization header is absent, uses a scheme other than
    /// `Bearer`, or carries an empty token.
    #[error("Missing or malformed credential")]
    MissingOrMalformedCredential,

    /// The token cannot be structurally decoded, or its header claims
    /// an algorithm other than the one this server is configured with.
    #[error("Malformed token")]
    MalformedToken,

    /// The token decodes but its signature does not verify against the
    /// configured secret.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// The token is authentic but outside its validity window.
    #[error("Token expired")]
    TokenExpired,

    /// No credential was supplied where one is required, or the
    /// supplied credential failed validation.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Authenticated, but not permitted to perform this operation on
    /// this resource.
    #[error("Forbidden: {0}")]
    Forbidden(&'static str),

    #[error("Username already registered: {0}")]
    DuplicateUsername(String),

    /// Catastrophic failure inside a cryptographic primitive (password
    /// hashing, MAC keying) or a structurally malformed stored digest.
    /// Never triggered by a plain mismatch.
    #[error("Password hashing failed")]
    Hashing,

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
