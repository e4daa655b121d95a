use serde::Serialize;
use thiserror::Error;

use crate::core::reference::ReferenceError;

/// Why a single reference could not be resolved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Empty reference")]
    EmptyReference,

    /// Carries the comma-separated list of loaded translations
    #[error("Unknown translation ({0})")]
    UnknownTranslation(String),

    #[error(transparent)]
    InvalidReference(#[from] ReferenceError),

    #[error("Verse not found")]
    VerseNotFound,

    #[error("Range not found")]
    RangeNotFound,
}

impl ResolutionError {
    /// Stable machine-readable name for the error kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyReference => "empty_reference",
            Self::UnknownTranslation(_) => "unknown_translation",
            Self::InvalidReference(_) => "invalid_reference",
            Self::VerseNotFound => "verse_not_found",
            Self::RangeNotFound => "range_not_found",
        }
    }
}

/// One reference to resolve, as read from a batch source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionRequest {
    pub reference: String,
    pub translation: String,
}

impl ResolutionRequest {
    pub fn new(reference: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            translation: translation.into(),
        }
    }
}

/// Outcome of resolving one reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The reference exactly as requested (trimmed)
    pub reference: String,

    /// Translation ID as requested, upper-cased
    pub translation: String,

    /// Cleaned verse text, or why there is none
    pub outcome: Result<String, ResolutionError>,
}

impl ResolutionResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn text(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<&ResolutionError> {
        self.outcome.as_ref().err()
    }

    /// Text for report columns: the verse text, or `ERROR: <message>`
    pub fn display_text(&self) -> String {
        match &self.outcome {
            Ok(text) => text.clone(),
            Err(e) => format!("ERROR: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: Result<String, ResolutionError>) -> ResolutionResult {
        ResolutionResult {
            reference: "John 3:16".to_string(),
            translation: "NKJV".to_string(),
            outcome,
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ResolutionError::EmptyReference.to_string(), "Empty reference");
        assert_eq!(
            ResolutionError::UnknownTranslation("NKJV, ESV, KJV".to_string()).to_string(),
            "Unknown translation (NKJV, ESV, KJV)"
        );
        assert_eq!(
            ResolutionError::from(ReferenceError::UnknownBook("Zzyx".to_string())).to_string(),
            "Unknown book: Zzyx"
        );
        assert_eq!(ResolutionError::RangeNotFound.kind(), "range_not_found");
    }

    #[test]
    fn test_display_text() {
        let ok = result(Ok("For God so loved the world".to_string()));
        assert!(ok.is_ok());
        assert_eq!(ok.text(), Some("For God so loved the world"));
        assert_eq!(ok.display_text(), "For God so loved the world");

        let err = result(Err(ResolutionError::VerseNotFound));
        assert_eq!(err.error(), Some(&ResolutionError::VerseNotFound));
        assert_eq!(err.display_text(), "ERROR: Verse not found");
    }
}
