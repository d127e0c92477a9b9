//! Argon2 password hashing.

use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::Rng;

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a plaintext password into an Argon2 PHC string with a random salt.
///
/// # Arguments
/// - `password` - Plaintext password
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash suitable for storage
/// - `Err(AppError::InternalErr(PasswordHash))` - Hashing failed
pub fn hash(password: &str) -> Result<String, AppError> {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    let salt = SaltString::encode_b64(&bytes)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()).into())
}

/// Checks a plaintext password against a stored hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok()
        })
        .unwrap_or(false)
}
