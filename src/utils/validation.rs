//! Centralized validation and limits.

use crate::core::types::TranslationId;

/// Maximum number of verse records accepted from a single corpus file
pub const MAX_RECORDS: usize = 100_000;

/// Maximum length of a reference string, in bytes
pub const MAX_REFERENCE_LENGTH: usize = 256;

/// Maximum length of a translation identifier
pub const MAX_TRANSLATION_ID_LENGTH: usize = 32;

/// Check if adding another record would exceed `max` (normally [`MAX_RECORDS`]).
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize, max: usize) -> Option<String> {
    if count >= max {
        Some(format!(
            "Too many records: adding another would exceed maximum of {max}"
        ))
    } else {
        None
    }
}

/// Validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty translation identifier")]
    EmptyTranslationId,
    #[error("Translation identifier too long: exceeds {MAX_TRANSLATION_ID_LENGTH} characters")]
    TranslationIdTooLong,
    #[error("Invalid translation identifier '{0}': only letters, digits, '-' and '_' are allowed")]
    InvalidTranslationId(String),
}

/// Validate a translation identifier before it is used to build a corpus file name.
///
/// Identifiers are upper-cased and restricted to ASCII letters, digits, `-`
/// and `_`, which rules out path separators and traversal.
///
/// # Errors
///
/// Returns `ValidationError::EmptyTranslationId` if the identifier is blank,
/// `ValidationError::TranslationIdTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidTranslationId` if it contains other characters.
///
/// # Examples
///
/// ```
/// use verse_solver::utils::validation::validate_translation_id;
///
/// assert_eq!(validate_translation_id("nkjv").unwrap().as_str(), "NKJV");
/// assert!(validate_translation_id("../KJV").is_err());
/// ```
pub fn validate_translation_id(raw: &str) -> Result<TranslationId, ValidationError> {
    let id = TranslationId::new(raw);
    let s = id.as_str();

    if s.is_empty() {
        return Err(ValidationError::EmptyTranslationId);
    }
    if s.len() > MAX_TRANSLATION_ID_LENGTH {
        return Err(ValidationError::TranslationIdTooLong);
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidTranslationId(s.to_string()));
    }

    Ok(id)
}

/// Parse a comma-separated list of translation identifiers, e.g. `"NKJV,ESV,KJV"`.
///
/// # Errors
///
/// Returns the first `ValidationError` encountered.
pub fn parse_translation_list(raw: &str) -> Result<Vec<TranslationId>, ValidationError> {
    let mut ids: Vec<TranslationId> = Vec::new();
    for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
        let id = validate_translation_id(part)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    if ids.is_empty() {
        return Err(ValidationError::EmptyTranslationId);
    }
    Ok(ids)
}

/// True if a reference is short enough to be parsed
#[must_use]
pub fn is_reasonable_reference(reference: &str) -> bool {
    reference.len() <= MAX_REFERENCE_LENGTH
}
