use serde::{Deserialize, Serialize};

/// Number of books in the canon
pub const BOOK_COUNT: u8 = 66;

/// Canonical book number, 1 (Genesis) through 66 (Revelation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BookNumber(u8);

impl BookNumber {
    /// Create a book number, returning `None` outside 1..=66
    #[must_use]
    pub fn new(n: u32) -> Option<Self> {
        match u8::try_from(n) {
            Ok(n) if (1..=BOOK_COUNT).contains(&n) => Some(Self(n)),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for BookNumber {
    type Error = String;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n).ok_or_else(|| format!("book number {n} is outside 1..={BOOK_COUNT}"))
    }
}

impl From<BookNumber> for u32 {
    fn from(book: BookNumber) -> Self {
        u32::from(book.0)
    }
}

impl std::fmt::Display for BookNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address of a single verse within one translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseKey {
    pub book: BookNumber,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseKey {
    #[must_use]
    pub fn new(book: BookNumber, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }
}

impl std::fmt::Display for VerseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.book, self.chapter, self.verse)
    }
}

/// Translation code such as `NKJV`; always trimmed and upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationId(String);

impl TranslationId {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TranslationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One verse as supplied by a translation corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVerseRecord {
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
    /// Raw text, possibly containing markup; `null` in source data reads as empty
    #[serde(default)]
    pub text: Option<String>,
}

impl RawVerseRecord {
    pub fn new(book: u32, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            book,
            chapter,
            verse,
            text: Some(text.into()),
        }
    }

    /// The lookup key for this record, if the book number is canonical
    #[must_use]
    pub fn key(&self) -> Option<VerseKey> {
        BookNumber::new(self.book).map(|book| VerseKey::new(book, self.chapter, self.verse))
    }
}
