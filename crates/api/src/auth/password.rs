//! Password hashing and strength checks.
//!
//! Hashes use Argon2id with a per-password random salt and are stored in PHC
//! string format, so the algorithm parameters travel with the hash and can be
//! tightened later without invalidating existing rows.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Upper bound on accepted password length. Argon2 hashing cost grows with
/// input size, so unbounded input is a cheap way to stall a worker.
const MAX_PASSWORD_LENGTH: usize = 128;

/// Hash a plaintext password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(false)` on mismatch; other errors (malformed hash) propagate.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check that a candidate password is acceptable: at least `min_length`
/// characters and at most [`MAX_PASSWORD_LENGTH`].
///
/// Returns `Err` with a human-readable explanation suitable for an API
/// validation message.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.len() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at most {MAX_PASSWORD_LENGTH} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_accepts_correct_password() {
        let hash = hash_password("correct-horse-battery-staple").expect("hashing should succeed");

        // PHC format with the argon2id identifier.
        assert!(hash.starts_with("$argon2id$"));

        assert!(verify_password("correct-horse-battery-staple", &hash)
            .expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("the-real-password").expect("hashing should succeed");
        let ok = verify_password("a-guess", &hash).expect("verify should succeed");
        assert!(!ok);
    }

    #[test]
    fn same_password_hashes_differently() {
        // Random salts: two hashes of one password must differ.
        let a = hash_password("repeat-after-me").expect("hashing should succeed");
        let b = hash_password("repeat-after-me").expect("hashing should succeed");
        assert_ne!(a, b);
    }

    #[test]
    fn strength_check_enforces_bounds() {
        let err = validate_password_strength("tiny", 12).unwrap_err();
        assert!(err.contains("at least 12 characters"));

        // Exactly at the minimum is fine.
        assert!(validate_password_strength("twelve_chars", 12).is_ok());

        let too_long = "x".repeat(MAX_PASSWORD_LENGTH + 1);
        let err = validate_password_strength(&too_long, 12).unwrap_err();
        assert!(err.contains("at most"));
    }
}
