//! Sanitizing untrusted form fields before they reach a repository

use chatroom_core::sanitize;

use super::error::{ServiceError, ServiceResult};

/// Sanitize a mandatory field, rejecting values that end up empty
pub(crate) fn required_text(field: &'static str, raw: &str) -> ServiceResult<String> {
    let clean = sanitize(raw).trim().to_owned();
    if clean.is_empty() {
        return Err(ServiceError::UnusableInput { field });
    }
    Ok(clean)
}

pub(crate) const USERNAME_MIN_LEN: usize = 2;
pub(crate) const USERNAME_MAX_LEN: usize = 32;

/// Sanitize a username and check its length on the cleaned value
pub(crate) fn username(raw: &str) -> ServiceResult<String> {
    let clean = required_text("Username", raw)?;
    let len = clean.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(ServiceError::InputLength {
            field: "Username",
            min: USERNAME_MIN_LEN,
            max: USERNAME_MAX_LEN,
        });
    }
    Ok(clean)
}

/// Email is stored exactly as typed, so any character the sanitizer
/// would drop rejects the field.
pub(crate) fn email(raw: &str) -> ServiceResult<String> {
    let trimmed = raw.trim();
    let clean = required_text("Email", trimmed)?;
    if clean != trimmed {
        return Err(ServiceError::UnsupportedCharacters { field: "Email" });
    }
    Ok(clean)
}

/// Sanitize an optional field; empty results are stored as absent
pub(crate) fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(|r| sanitize(r).trim().to_owned())
        .filter(|s| !s.is_empty())
}
