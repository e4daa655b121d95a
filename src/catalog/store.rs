use std::collections::HashMap;

use crate::catalog::index::TranslationIndex;
use crate::core::types::TranslationId;

/// Translations loaded when no list is given
pub const DEFAULT_TRANSLATIONS: [&str; 3] = ["NKJV", "ESV", "KJV"];

/// Translation used for requests that do not name one
pub const DEFAULT_TRANSLATION: &str = "NKJV";

/// Which translations to load and which one to fall back to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Translations to load, in load order
    pub translations: Vec<TranslationId>,
    /// Translation assumed when a request leaves it blank
    pub default_translation: TranslationId,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            translations: DEFAULT_TRANSLATIONS
                .iter()
                .map(TranslationId::new)
                .collect(),
            default_translation: TranslationId::new(DEFAULT_TRANSLATION),
        }
    }
}

/// The set of loaded translation indexes.
///
/// Built once at startup and only read afterwards; share it by reference.
#[derive(Debug, Default)]
pub struct TranslationLibrary {
    /// Indexes in load order
    indexes: Vec<TranslationIndex>,

    /// Index: translation ID -> position in indexes vec
    id_to_index: HashMap<TranslationId, usize>,
}

impl TranslationLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation, replacing any earlier index with the same ID
    pub fn add(&mut self, index: TranslationIndex) {
        if let Some(&existing) = self.id_to_index.get(index.id()) {
            self.indexes[existing] = index;
            return;
        }
        self.id_to_index
            .insert(index.id().clone(), self.indexes.len());
        self.indexes.push(index);
    }

    /// Get a translation by ID; the comparison ignores case and surrounding whitespace
    pub fn get(&self, id: &str) -> Option<&TranslationIndex> {
        self.id_to_index
            .get(&TranslationId::new(id))
            .map(|&idx| &self.indexes[idx])
    }

    /// IDs of all loaded translations, in load order
    pub fn ids(&self) -> impl Iterator<Item = &TranslationId> {
        self.indexes.iter().map(TranslationIndex::id)
    }

    /// Comma-separated list of loaded IDs, e.g. `"NKJV, ESV, KJV"`
    pub fn describe_ids(&self) -> String {
        self.ids()
            .map(TranslationId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslationIndex> {
        self.indexes.iter()
    }

    /// Number of loaded translations
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

impl FromIterator<TranslationIndex> for TranslationLibrary {
    fn from_iter<T: IntoIterator<Item = TranslationIndex>>(iter: T) -> Self {
        let mut library = Self::new();
        for index in iter {
            library.add(index);
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BookNumber, RawVerseRecord, VerseKey};

    fn index(id: &str, text: &str) -> TranslationIndex {
        TranslationIndex::build(
            TranslationId::new(id),
            vec![RawVerseRecord::new(43, 3, 16, text)],
        )
    }

    #[test]
    fn test_default_config() {
        let config = LibraryConfig::default();
        assert_eq!(config.translations.len(), 3);
        assert_eq!(config.default_translation.as_str(), "NKJV");
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let library: TranslationLibrary = vec![index("NKJV", "a"), index("esv", "b")]
            .into_iter()
            .collect();

        assert_eq!(library.len(), 2);
        assert!(library.get("nkjv").is_some());
        assert!(library.get(" ESV ").is_some());
        assert!(library.get("LXX").is_none());
        assert_eq!(library.describe_ids(), "NKJV, ESV");
    }

    #[test]
    fn test_add_replaces_same_id() {
        let mut library = TranslationLibrary::new();
        library.add(index("KJV", "old"));
        library.add(index("kjv", "new"));

        assert_eq!(library.len(), 1);
        let kjv = library.get("KJV").unwrap();
        let key = VerseKey::new(BookNumber::new(43).unwrap(), 3, 16);
        assert_eq!(kjv.lookup(&key), Some("new"));
    }
}
