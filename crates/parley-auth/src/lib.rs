//! Password hashing for parley accounts.
//!
//! Digests are Argon2id PHC strings with a per-user random salt, so two
//! hashes of the same password differ. Verification parses the stored
//! string and delegates the comparison to `argon2`.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct HashError(String);

/// Hash a plaintext password into a PHC-format digest.
pub fn hash_password(plaintext: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| HashError(e.to_string()))?
        .to_string();
    Ok(digest)
}

/// Check a plaintext password against a stored digest.
///
/// Any failure collapses to `false`: wrong password, and also a digest
/// that does not parse as a PHC string (a corrupt or legacy row should
/// read as "no match", not crash a login).
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}
