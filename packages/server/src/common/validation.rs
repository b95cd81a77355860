//! Input validation for registration and enquiry submission.
//!
//! Limits match the persisted schema: names 2-100 characters, passwords at
//! least 6 characters, emails checked structurally.

use lazy_static::lazy_static;
use regex::Regex;

use crate::common::ApiError;

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 100;
const PASSWORD_MIN_LEN: usize = 6;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// Validate a display name (2-100 characters).
pub fn validate_name(name: &str) -> Result<(), ApiError> {
    let len = name.chars().count();
    if len < NAME_MIN_LEN || len > NAME_MAX_LEN {
        return Err(ApiError::Validation(format!(
            "Name must be between {} and {} characters",
            NAME_MIN_LEN, NAME_MAX_LEN
        )));
    }
    Ok(())
}

/// Validate an email address structurally.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ApiError::Validation(
            "Must be a valid email address".to_string(),
        ));
    }
    Ok(())
}

/// Validate a password (at least 6 characters).
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ApiError::Validation(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_bounds() {
        assert!(validate_name("Al").is_ok());
        assert!(validate_name(&"x".repeat(100)).is_ok());
        assert!(validate_name("A").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_email_format() {
        assert!(validate_email("alice@x.com").is_ok());
        assert!(validate_email("bob.smith@mail.example.org").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@domain").is_err());
        assert!(validate_email("spaces in@x.com").is_err());
        assert!(validate_email("@x.com").is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("").is_err());
    }
}
