//! Credential rules: input validation and password hash/verify.

use crate::error::{AppError, AppResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

const MIN_PASSWORD_CHARS: usize = 6;

/// Registration input rules, checked in order: all fields present, then
/// password length. Emails are taken as given; no normalization.
pub fn validate_registration(name: &str, email: &str, password: &str) -> AppResult<()> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Please provide all required fields".to_string(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> AppResult<()> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Please provide email and password".to_string(),
        ));
    }
    Ok(())
}

/// Salted one-way hash with a fresh random salt per call.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))?
        .to_string();
    Ok(hash)
}

/// Ok(false) means the password does not match; Err means the stored hash
/// itself is unusable.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("parse hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let hash = hash_password("mypassword").unwrap();
        assert!(verify_password("mypassword", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted_per_call() {
        let a = hash_password("same-input").unwrap();
        let b = hash_password("same-input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        assert!(verify_password("anything", "not-a-valid-hash").is_err());
    }

    #[test]
    fn registration_requires_all_fields() {
        for (name, email, password) in [
            ("", "a@x.com", "secret1"),
            ("A", "", "secret1"),
            ("A", "a@x.com", ""),
        ] {
            let err = validate_registration(name, email, password).unwrap_err();
            assert_eq!(err.to_string(), "Please provide all required fields");
        }
    }

    #[test]
    fn registration_rejects_short_password() {
        let err = validate_registration("A", "a@x.com", "five5").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
        assert!(validate_registration("A", "a@x.com", "sixsix").is_ok());
    }

    #[test]
    fn login_requires_email_and_password() {
        for (email, password) in [("", "secret1"), ("a@x.com", "")] {
            let err = validate_login(email, password).unwrap_err();
            assert_eq!(err.to_string(), "Please provide email and password");
        }
        assert!(validate_login("a@x.com", "secret1").is_ok());
    }
}
