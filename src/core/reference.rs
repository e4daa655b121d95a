use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::core::book::{book_name, resolve_book};
use crate::core::types::{BookNumber, VerseKey};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Unknown book: {0}")]
    UnknownBook(String),
}

/// `<book> <chapter>:<verse>[-<verse>]`; the book is the shortest prefix that leaves a valid suffix
static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+(\d+):(\d+)(?:-(\d+))?$").expect("reference pattern is a valid regex")
});

/// A reference broken into canonical parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedReference {
    pub book: BookNumber,
    pub chapter: u32,
    pub verse_start: u32,
    /// Equal to `verse_start` for a single verse; not guaranteed to be `>= verse_start`
    pub verse_end: u32,
}

impl ParsedReference {
    #[must_use]
    pub fn is_single_verse(&self) -> bool {
        self.verse_start == self.verse_end
    }

    /// Keys covered by this reference in ascending verse order; empty when the range is reversed
    pub fn keys(&self) -> impl Iterator<Item = VerseKey> + '_ {
        self.keys_through(self.verse_end)
    }

    /// Like [`keys`](Self::keys), but stops at `last` when the range runs past it
    pub fn keys_through(&self, last: u32) -> impl Iterator<Item = VerseKey> + '_ {
        (self.verse_start..=self.verse_end.min(last))
            .map(|verse| VerseKey::new(self.book, self.chapter, verse))
    }
}

impl std::fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{}",
            book_name(self.book),
            self.chapter,
            self.verse_start
        )?;
        if !self.is_single_verse() {
            write!(f, "-{}", self.verse_end)?;
        }
        Ok(())
    }
}

/// Parse a human-written reference such as `"1 Cor 13:4-7"`.
///
/// # Errors
///
/// Returns `ReferenceError::InvalidFormat` if the text does not end in
/// `chapter:verse` or `chapter:start-end`, or a number does not fit, and
/// `ReferenceError::UnknownBook` if the book token matches no known book.
pub fn parse_reference(raw: &str) -> Result<ParsedReference, ReferenceError> {
    let trimmed = raw.trim();
    let invalid = || ReferenceError::InvalidFormat(trimmed.to_string());

    let caps = REFERENCE_PATTERN.captures(trimmed).ok_or_else(invalid)?;

    let number = |i: usize| -> Result<Option<u32>, ReferenceError> {
        caps.get(i)
            .map(|m| m.as_str().parse::<u32>().map_err(|_| invalid()))
            .transpose()
    };

    let chapter = number(2)?.ok_or_else(invalid)?;
    let verse_start = number(3)?.ok_or_else(invalid)?;
    let verse_end = number(4)?.unwrap_or(verse_start);

    let token = &caps[1];
    let book = resolve_book(token).ok_or_else(|| ReferenceError::UnknownBook(token.to_string()))?;

    Ok(ParsedReference {
        book,
        chapter,
        verse_start,
        verse_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::book::BOOKS;
    use proptest::prelude::*;

    fn book(n: u32) -> BookNumber {
        BookNumber::new(n).unwrap()
    }

    #[test]
    fn test_parse_single_verse() {
        let parsed = parse_reference("John 3:16").unwrap();
        assert_eq!(parsed.book, book(43));
        assert_eq!(parsed.chapter, 3);
        assert_eq!(parsed.verse_start, 16);
        assert!(parsed.is_single_verse());
    }

    #[test]
    fn test_parse_range_with_numbered_book() {
        let parsed = parse_reference("  1 Cor 13:4-7 ").unwrap();
        assert_eq!(parsed.book, book(46));
        assert_eq!(parsed.chapter, 13);
        assert_eq!((parsed.verse_start, parsed.verse_end), (4, 7));
        assert_eq!(parsed.to_string(), "1 Corinthians 13:4-7");
    }

    #[test]
    fn test_parse_multi_word_and_numeric_books() {
        assert_eq!(parse_reference("Song of Solomon 2:4").unwrap().book, book(22));
        assert_eq!(parse_reference("1 Thess. 5:17").unwrap().book, book(52));
        assert_eq!(parse_reference("43 3:16").unwrap().book, book(43));
    }

    #[test]
    fn test_reversed_range_passes_through() {
        let parsed = parse_reference("Ps 23:6-1").unwrap();
        assert_eq!((parsed.verse_start, parsed.verse_end), (6, 1));
        assert_eq!(parsed.keys().count(), 0);
    }

    #[test]
    fn test_keys_cover_range_in_order() {
        let parsed = parse_reference("Gen 1:1-3").unwrap();
        let verses: Vec<u32> = parsed.keys().map(|k| k.verse).collect();
        assert_eq!(verses, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_formats() {
        for raw in ["John 3", "John3:16", "John 3:x", "John 3:16-", "3:16", "John 3:16a"] {
            assert_eq!(
                parse_reference(raw),
                Err(ReferenceError::InvalidFormat(raw.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_number_overflow_is_invalid_format() {
        assert!(matches!(
            parse_reference("John 99999999999:1"),
            Err(ReferenceError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_unknown_book_reports_token() {
        assert_eq!(
            parse_reference("Zzyx 1:1"),
            Err(ReferenceError::UnknownBook("Zzyx".to_string()))
        );
        assert_eq!(
            parse_reference("Zzyx 1:1").unwrap_err().to_string(),
            "Unknown book: Zzyx"
        );
    }

    proptest! {
        #[test]
        fn prop_alias_round_trip(
            book_idx in 0usize..BOOKS.len(),
            alias_idx in 0usize..4,
            chapter in 1u32..200,
            verse in 1u32..200,
        ) {
            let entry = &BOOKS[book_idx];
            let alias = entry.aliases[alias_idx % entry.aliases.len()];
            let parsed = parse_reference(&format!("{alias} {chapter}:{verse}")).unwrap();
            prop_assert_eq!(parsed.book.get(), entry.number);
            prop_assert_eq!(parsed.chapter, chapter);
            prop_assert_eq!(parsed.verse_start, verse);
            prop_assert_eq!(parsed.verse_end, verse);
        }
    }
}
