//! Email address validation and normalization.
//!
//! Deliberately small: one local part, one `@`, a dotted domain. The
//! domain is lowercased on success. Callers that must not fail (client
//! construction) fall back to the raw string.

use crate::error::CoreError;

/// Validate and normalize an email address.
pub fn normalize(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    let invalid = || CoreError::InvalidEmail(raw.to_string());

    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || trimmed.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }

    Ok(format!("{}@{}", local, domain.to_ascii_lowercase()))
}
