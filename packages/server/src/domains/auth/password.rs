//! Password hashing for the credential store.
//!
//! Argon2id with per-password random salts. Verification goes through the
//! PHC-format hash string, so parameters can change without invalidating
//! existing credentials. The plaintext and the stored hash never leave this
//! module's callers.

use anyhow::{anyhow, Result};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hash a plaintext password into a PHC-format string.
pub fn hash(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;
    Ok(hashed.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// The underlying comparison is constant-time.
pub fn verify(plaintext: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| anyhow!("Stored password hash is malformed: {}", e))?;
    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash("secret1").unwrap();
        assert!(verify("secret1", &hashed).unwrap());
        assert!(!verify("secret2", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash("secret1").unwrap();
        let second = hash("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_stored_hash() {
        assert!(verify("secret1", "not-a-phc-string").is_err());
    }
}
