//! Bcrypt password hashing.
//!
//! Hashing and verification are CPU bound, so both run on the blocking thread pool.
//! Bcrypt only reads the first 72 bytes of its input; both functions use the
//! non-truncating variants so a longer password never matches on its prefix alone.

use bcrypt::BcryptError;

use crate::server::error::AppError;

/// Longest password, in bytes, that bcrypt can hash without truncation.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hashes a plaintext password with a fresh salt.
///
/// # Arguments
/// - `password` - Plaintext password
/// - `cost` - Bcrypt work factor
///
/// # Returns
/// - `Ok(String)` - Bcrypt hash in modular crypt format
/// - `Err(AppError::HashErr)` - Invalid cost or password longer than [`MAX_PASSWORD_BYTES`]
/// - `Err(AppError::InternalError)` - The blocking task failed
pub async fn hash(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(Into::into)
}

/// Checks a plaintext password against a stored hash.
///
/// Passwords longer than [`MAX_PASSWORD_BYTES`] can never have been stored, so they
/// simply do not match.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError)` - Stored hash is malformed or the blocking task failed
pub async fn verify(password: String, password_hash: String) -> Result<bool, AppError> {
    let result = tokio::task::spawn_blocking(move || {
        bcrypt::non_truncating_verify(password, &password_hash)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))?;

    match result {
        Ok(matches) => Ok(matches),
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
