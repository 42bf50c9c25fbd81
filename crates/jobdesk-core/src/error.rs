use thiserror::Error;

/// Core-level errors.
///
/// Deliberately small: boundary validation of request payloads and
/// internal invariant breaks. Credential, token, and ownership failures
/// have their own taxonomy in the service layer.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}
