use tracing::debug;

use crate::catalog::index::TranslationIndex;
use crate::catalog::store::TranslationLibrary;
use crate::core::reference::{parse_reference, ParsedReference, ReferenceError};
use crate::core::types::TranslationId;
use crate::matching::outcome::{ResolutionError, ResolutionRequest, ResolutionResult};
use crate::utils::validation::is_reasonable_reference;

/// Resolves references against a loaded library
pub struct VerseResolver<'a> {
    library: &'a TranslationLibrary,
}

impl<'a> VerseResolver<'a> {
    pub fn new(library: &'a TranslationLibrary) -> Self {
        Self { library }
    }

    /// Resolve a single reference in the given translation.
    ///
    /// Never fails as a whole: every problem is reported in the result.
    pub fn resolve(&self, reference: &str, translation: &str) -> ResolutionResult {
        let reference = reference.trim();
        let translation = TranslationId::new(translation);

        let outcome = self.lookup(reference, &translation);
        if let Err(e) = &outcome {
            debug!(reference, translation = %translation, error = %e, "Reference not resolved");
        }

        ResolutionResult {
            reference: reference.to_string(),
            translation: translation.as_str().to_string(),
            outcome,
        }
    }

    pub fn resolve_request(&self, request: &ResolutionRequest) -> ResolutionResult {
        self.resolve(&request.reference, &request.translation)
    }

    /// Resolve a batch, one result per request in input order
    pub fn resolve_all(&self, requests: &[ResolutionRequest]) -> Vec<ResolutionResult> {
        requests.iter().map(|r| self.resolve_request(r)).collect()
    }

    fn lookup(&self, reference: &str, translation: &TranslationId) -> Result<String, ResolutionError> {
        if reference.is_empty() {
            return Err(ResolutionError::EmptyReference);
        }

        let index = self
            .library
            .get(translation.as_str())
            .ok_or_else(|| ResolutionError::UnknownTranslation(self.library.describe_ids()))?;

        if !is_reasonable_reference(reference) {
            return Err(ReferenceError::InvalidFormat(reference.to_string()).into());
        }
        let parsed = parse_reference(reference)?;

        if parsed.is_single_verse() {
            lookup_verse(index, &parsed)
        } else {
            lookup_range(index, &parsed)
        }
    }
}

fn lookup_verse(index: &TranslationIndex, parsed: &ParsedReference) -> Result<String, ResolutionError> {
    parsed
        .keys()
        .next()
        .and_then(|key| index.lookup(&key))
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or(ResolutionError::VerseNotFound)
}

/// Join every non-empty verse of the range; missing verses are skipped.
///
/// Iteration stops at the chapter's last stored verse, so the cost of a range
/// is bounded by the corpus and not by the numbers in the reference.
fn lookup_range(index: &TranslationIndex, parsed: &ParsedReference) -> Result<String, ResolutionError> {
    let Some(last) = index.last_verse(parsed.book, parsed.chapter) else {
        return Err(ResolutionError::RangeNotFound);
    };

    let found: Vec<&str> = parsed
        .keys_through(last)
        .filter_map(|key| index.lookup(&key))
        .filter(|text| !text.is_empty())
        .collect();

    if found.is_empty() {
        Err(ResolutionError::RangeNotFound)
    } else {
        Ok(found.join(" "))
    }
}
