use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Hashes a password using Argon2id with a random salt.
///
/// The returned digest is self-contained (algorithm parameters and salt
/// embedded in PHC string format) and suitable for storage. Two calls on
/// the same plaintext produce different digests.
///
/// ## Errors
/// Returns `Hashing` only on catastrophic failure inside the hasher.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| {
            tracing::error!(error = %err, "Password hashing failed");
            ServiceError::Hashing
        })?;

    Ok(password_hash.to_string())
}

/// ## Summary
/// Verifies a password against a stored Argon2 digest.
///
/// Recomputes the hash with the parameters embedded in `password_hash`
/// and compares in constant time (provided by the `argon2` crate).
/// A legitimate mismatch is `Ok(false)`, not an error.
///
/// ## Errors
/// Returns `Hashing` if the stored digest is structurally malformed.
pub fn verify_password(password: &str, password_hash: &str) -> ServiceResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|err| {
        tracing::error!(error = %err, "Stored password digest is malformed");
        ServiceError::Hashing
    })?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => {
            tracing::error!(error = %err, "Password verification failed");
            Err(ServiceError::Hashing)
        }
    }
}
