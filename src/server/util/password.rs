//! Password hashing helpers.
//!
//! Both hashing and verification run on the blocking thread pool. bcrypt only reads the first
//! 72 bytes of its input (including a trailing NUL), so longer passwords are never hashed or
//! matched here instead of being silently truncated.

use bcrypt::BcryptError;

use crate::server::error::Error;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum accepted password length in UTF-8 bytes, the most bcrypt hashes without truncation.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Hashes `password` with bcrypt at the given work factor.
///
/// # Arguments
/// - `password` - Plain text password, at most [`MAX_PASSWORD_BYTES`] bytes
/// - `cost` - bcrypt cost, between 4 and 31
///
/// # Returns
/// - `Ok(String)` - bcrypt hash in modular crypt format
/// - `Err(Error::PasswordHashError)` - Invalid cost, password too long, or hashing failure
/// - `Err(Error::TaskJoinError)` - The blocking task panicked
pub async fn hash_password(password: &str, cost: u32) -> Result<String, Error> {
    let password = password.to_string();

    let hash =
        tokio::task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost)).await??;

    Ok(hash)
}

/// Checks `password` against a stored bcrypt `hash`.
///
/// Returns `Ok(false)` for a mismatch, including passwords longer than [`MAX_PASSWORD_BYTES`],
/// errors only when the hash itself is malformed.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let password = password.to_string();
    let hash = hash.to_string();

    let result =
        tokio::task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash)).await?;

    match result {
        Ok(is_valid) => Ok(is_valid),
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Spends the same bcrypt work as a verification at `cost`, discarding the result.
///
/// Called on login attempts for unknown accounts so they take as long as a wrong password.
pub async fn burn_password_hash(password: &str, cost: u32) -> Result<(), Error> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

    Ok(())
}
