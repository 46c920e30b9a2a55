//! Password hashing and verification using Argon2id.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`) so parameters and salt travel with
//! the hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{distr::Alphanumeric, Rng};

use crate::server::error::{auth::AuthError, Error};

/// Length of generated temporary passwords.
pub const TEMPORARY_PASSWORD_LENGTH: usize = 16;

/// Hash a password with Argon2id default parameters and a random salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash.
///
/// A malformed stored hash never matches; it is logged rather than surfaced so a single
/// corrupt row can't lock other users with the same username out.
pub fn verify_password(password: &str, hash: &str) -> bool {
    use dioxus_logger::tracing;

    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Generate a random alphanumeric temporary password.
pub fn generate_temporary_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TEMPORARY_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect a hashed password to verify and a different one to be rejected
    #[test]
    fn verifies_only_matching_password() {
        let hash = hash_password("hunter2").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    /// Expect the same password to produce different hashes due to the random salt
    #[test]
    fn salts_every_hash() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();

        assert_ne!(first, second);
    }

    /// Expect a malformed stored hash to never match
    #[test]
    fn malformed_hash_does_not_match() {
        assert!(!verify_password("hunter2", "hunter2"));
    }

    /// Expect temporary passwords to be alphanumeric and of fixed length
    #[test]
    fn generates_temporary_password() {
        let password = generate_temporary_password();

        assert_eq!(password.len(), TEMPORARY_PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(password, generate_temporary_password());
    }
}
