use std::collections::HashMap;

use tracing::{debug, warn};

use crate::core::clean::clean_verse;
use crate::core::types::{BookNumber, RawVerseRecord, TranslationId, VerseKey};

/// Cleaned verse text for one translation, keyed by (book, chapter, verse)
#[derive(Debug, Clone)]
pub struct TranslationIndex {
    id: TranslationId,
    verses: HashMap<VerseKey, String>,
    /// Highest verse number present in each (book, chapter)
    last_verse: HashMap<(BookNumber, u32), u32>,
    /// Number of records that overwrote an earlier record with the same key
    duplicates: usize,
    /// Number of records dropped for a non-canonical book or a zero chapter/verse
    skipped: usize,
}

impl TranslationIndex {
    /// Build an index from raw records, cleaning each text once.
    ///
    /// Records sharing a key overwrite earlier ones (last write wins). Records
    /// whose book is outside the canon, or whose chapter or verse is 0, are skipped.
    pub fn build<I>(id: TranslationId, records: I) -> Self
    where
        I: IntoIterator<Item = RawVerseRecord>,
    {
        let records = records.into_iter();
        let mut verses = HashMap::with_capacity(records.size_hint().0);
        let mut last_verse: HashMap<(BookNumber, u32), u32> = HashMap::new();
        let mut duplicates = 0;
        let mut skipped = 0;

        for record in records {
            let Some(key) = record.key() else {
                debug!(translation = %id, book = record.book, "Skipping record with unknown book");
                skipped += 1;
                continue;
            };
            if key.chapter == 0 || key.verse == 0 {
                debug!(translation = %id, key = %key, "Skipping record with zero chapter or verse");
                skipped += 1;
                continue;
            }

            let last = last_verse.entry((key.book, key.chapter)).or_default();
            *last = (*last).max(key.verse);

            let text = clean_verse(record.text.as_deref().unwrap_or_default());
            if verses.insert(key, text).is_some() {
                debug!(translation = %id, key = %key, "Duplicate verse key, keeping later record");
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            warn!(
                translation = %id,
                duplicates,
                "Corpus contains duplicate verse keys; later records replaced earlier ones"
            );
        }

        Self {
            id,
            verses,
            last_verse,
            duplicates,
            skipped,
        }
    }

    pub fn id(&self) -> &TranslationId {
        &self.id
    }

    /// Get the cleaned text for a verse
    pub fn lookup(&self, key: &VerseKey) -> Option<&str> {
        self.verses.get(key).map(String::as_str)
    }

    /// Highest verse number stored for a chapter, or `None` if the chapter is absent
    pub fn last_verse(&self, book: BookNumber, chapter: u32) -> Option<u32> {
        self.last_verse.get(&(book, chapter)).copied()
    }

    /// Number of distinct verses in the index
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(book: u32, chapter: u32, verse: u32) -> VerseKey {
        VerseKey::new(BookNumber::new(book).unwrap(), chapter, verse)
    }

    #[test]
    fn test_build_cleans_text() {
        let index = TranslationIndex::build(
            TranslationId::new("nkjv"),
            vec![RawVerseRecord::new(
                19,
                23,
                1,
                "<i>A Psalm of David.</i> The LORD is my shepherd ;",
            )],
        );

        assert_eq!(index.id().as_str(), "NKJV");
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(&key(19, 23, 1)), Some("The LORD is my shepherd;"));
    }

    #[test]
    fn test_last_write_wins() {
        let index = TranslationIndex::build(
            TranslationId::new("KJV"),
            vec![
                RawVerseRecord::new(43, 11, 35, "first"),
                RawVerseRecord::new(43, 11, 35, "Jesus wept."),
            ],
        );

        assert_eq!(index.len(), 1);
        assert_eq!(index.duplicates(), 1);
        assert_eq!(index.lookup(&key(43, 11, 35)), Some("Jesus wept."));
    }

    #[test]
    fn test_missing_text_is_empty() {
        let mut record = RawVerseRecord::new(1, 1, 1, "");
        record.text = None;
        let index = TranslationIndex::build(TranslationId::new("ESV"), vec![record]);
        assert_eq!(index.lookup(&key(1, 1, 1)), Some(""));
    }

    #[test]
    fn test_skips_non_canonical_books() {
        let index = TranslationIndex::build(
            TranslationId::new("ESV"),
            vec![
                RawVerseRecord::new(0, 1, 1, "nothing"),
                RawVerseRecord::new(67, 1, 1, "apocrypha"),
                RawVerseRecord::new(1, 1, 1, "In the beginning"),
            ],
        );
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 2);
    }

    #[test]
    fn test_lookup_missing() {
        let index = TranslationIndex::build(TranslationId::new("ESV"), Vec::new());
        assert!(index.is_empty());
        assert!(index.lookup(&key(1, 1, 1)).is_none());
    }

    #[test]
    fn test_skips_zero_chapter_and_verse() {
        let index = TranslationIndex::build(
            TranslationId::new("KJV"),
            vec![
                RawVerseRecord::new(1, 0, 1, "no chapter"),
                RawVerseRecord::new(1, 1, 0, "no verse"),
                RawVerseRecord::new(1, 1, 1, "In the beginning"),
            ],
        );
        assert_eq!(index.len(), 1);
        assert_eq!(index.skipped(), 2);
        assert!(index.lookup(&key(1, 0, 1)).is_none());
    }

    #[test]
    fn test_last_verse_per_chapter() {
        let index = TranslationIndex::build(
            TranslationId::new("ESV"),
            vec![
                RawVerseRecord::new(43, 3, 16, "a"),
                RawVerseRecord::new(43, 3, 2, "b"),
                RawVerseRecord::new(43, 4, 1, "c"),
            ],
        );
        let john = BookNumber::new(43).unwrap();
        assert_eq!(index.last_verse(john, 3), Some(16));
        assert_eq!(index.last_verse(john, 4), Some(1));
        assert_eq!(index.last_verse(john, 5), None);
    }
}
