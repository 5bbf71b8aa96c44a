//! Password hashing with Argon2id and password strength validation.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use korip_core::error::CoreError;

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string for storage.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash.
///
/// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch, and `Err` only
/// when the stored hash itself is malformed.
pub fn verify_password(
    password: &str,
    stored_hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(stored_hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// A short list of extremely common passwords rejected outright.
const COMMON_PASSWORDS: &[&str] = &[
    "password", "password1", "password123", "12345678", "123456789", "1234567890", "qwerty123",
    "qwertyuiop", "iloveyou", "admin123", "letmein1", "welcome1", "sunshine", "princess",
    "football", "baseball", "dragon123", "monkey123",
];

/// Validate password strength before hashing.
///
/// Rules, in order of evaluation:
/// 1. at least [`MIN_PASSWORD_LENGTH`] characters
/// 2. not entirely numeric
/// 3. not in the common-password list (case-insensitive)
/// 4. not too similar to the user's email local-part or nickname
///
/// Returns [`CoreError::InvalidPassword`] with a human-readable reason on
/// the first rule that fails.
pub fn validate_password_strength(
    password: &str,
    email: &str,
    nickname: &str,
) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::InvalidPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::InvalidPassword(
            "password must not be entirely numeric".to_string(),
        ));
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return Err(CoreError::InvalidPassword(
            "password is too common".to_string(),
        ));
    }

    let local_part = email.split('@').next().unwrap_or("").to_lowercase();
    for attribute in [local_part.as_str(), &nickname.to_lowercase()] {
        if attribute.len() >= 4 && (lowered.contains(attribute) || attribute.contains(&lowered)) {
            return Err(CoreError::InvalidPassword(
                "password is too similar to your personal information".to_string(),
            ));
        }
    }

    Ok(())
}
