use jobdesk_core::error::CoreError;
use jobdesk_core::types::SubjectId;
use jobdesk_core::util::clock::Clock;

use crate::auth::token::TokenCodec;
use crate::auth::{extract_bearer, hash_password, verify_password};
use crate::error::{ServiceError, ServiceResult};
use crate::store::{CredentialStore, UserRecord};

/// Result of a successful login: the public user record plus a fresh
/// session token.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: UserRecord,
    pub token: String,
}

/// ## Summary
/// Registers a new user: hashes the submitted password and persists the
/// credential. The plaintext never leaves this function and is never
/// logged.
///
/// ## Errors
/// - `ValidationError` if username or password is empty.
/// - `DuplicateUsername` if the username is already registered.
/// - `Hashing` on internal hashing failure.
#[tracing::instrument(skip(store, password), fields(username = %username))]
pub async fn register<S: CredentialStore>(
    store: &S,
    username: &str,
    password: &str,
) -> ServiceResult<UserRecord> {
    if username.is_empty() || password.is_empty() {
        return Err(CoreError::ValidationError(
            "username and password are required".to_string(),
        )
        .into());
    }

    let password_hash = hash_password(password)?;
    let user = store.create_credential(username, &password_hash).await?;

    tracing::debug!(user_id = %user.id, "Registered user");
    Ok(user)
}

/// ## Summary
/// Authenticates a username/password pair and issues a session token.
///
/// The submitted plaintext is verified directly against the stored
/// digest. An unknown username and a wrong password fail identically,
/// so login does not reveal which usernames exist.
///
/// ## Errors
/// - `NotAuthenticated` on unknown username or wrong password.
/// - `Hashing` if the stored digest is malformed.
/// - `NotFound` if the user row vanished between lookups.
#[tracing::instrument(skip(store, codec, password), fields(username = %username))]
pub async fn login<S: CredentialStore, C: Clock>(
    store: &S,
    codec: &TokenCodec<C>,
    username: &str,
    password: &str,
) -> ServiceResult<LoginOutcome> {
    let Some(stored_hash) = store.password_hash_by_username(username).await? else {
        tracing::debug!("Login attempt for unknown username");
        return Err(ServiceError::NotAuthenticated);
    };

    if !verify_password(password, &stored_hash)? {
        tracing::debug!("Login attempt with wrong password");
        return Err(ServiceError::NotAuthenticated);
    }

    let user = store
        .user_by_username(username)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("user {username}")))?;

    let token = codec.issue(user.id)?;

    tracing::debug!(user_id = %user.id, "Issued session token");
    Ok(LoginOutcome { user, token })
}

/// ## Summary
/// Authenticates an inbound request: extracts the bearer token from the
/// Authorization header value and validates it, returning the subject.
///
/// ## Errors
/// Propagates the specific kind (`MissingOrMalformedCredential`,
/// `MalformedToken`, `InvalidSignature`, `TokenExpired`) so the caller
/// can map all of them to an unauthenticated response.
pub fn subject_from_header<C: Clock>(
    codec: &TokenCodec<C>,
    header_value: Option<&str>,
) -> ServiceResult<SubjectId> {
    let token = extract_bearer(header_value)?;
    codec.validate(token)
}
