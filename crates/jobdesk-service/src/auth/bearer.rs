use crate::error::{ServiceError, ServiceResult};

const BEARER_PREFIX: &str = "Bearer ";

/// ## Summary
/// Pulls the bearer token out of an Authorization header value.
///
/// The header must be exactly the literal `"Bearer "` followed by a
/// non-empty token. An absent header, a different scheme, an empty
/// token, or a token containing whitespace (tokens are dot-separated
/// base64url, so whitespace can only mean a malformed header, e.g. a
/// doubled space after the scheme) all fail the same way. Pure function.
///
/// ## Errors
/// Returns `MissingOrMalformedCredential` for any shape violation.
pub fn extract_bearer(header_value: Option<&str>) -> ServiceResult<&str> {
    let token = header_value
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(ServiceError::MissingOrMalformedCredential)?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(ServiceError::MissingOrMalformedCredential);
    }

    Ok(token)
}
