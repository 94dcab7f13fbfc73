//! Form Validation
//!
//! Field rules checked before anything is sent.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// 10 MiB
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

pub const ALLOWED_PHOTO_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/gif", "image/webp"];

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    Ok(())
}

/// A file the user picked or dropped, before it is read
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoCandidate {
    pub mime_type: String,
    pub size: u64,
}

pub fn validate_photo(photo: &PhotoCandidate) -> Result<(), ValidationError> {
    if !ALLOWED_PHOTO_TYPES.contains(&photo.mime_type.as_str()) {
        return Err(ValidationError::UnsupportedPhotoType(photo.mime_type.clone()));
    }
    if photo.size > MAX_PHOTO_BYTES {
        return Err(ValidationError::PhotoTooLarge(photo.size));
    }
    Ok(())
}
