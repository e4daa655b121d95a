//! Canonical book table and name resolution.
//!
//! Book tokens are compared after lowercasing and removing whitespace and
//! periods, so `"1 Cor."`, `"1cor"` and `"1 COR"` all resolve to 1 Corinthians.
//! Purely numeric tokens are taken as book numbers directly.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::types::{BookNumber, BOOK_COUNT};

/// A book of the canon with its accepted aliases (already normalized)
#[derive(Debug, Clone, Copy)]
pub struct Book {
    pub number: u8,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

macro_rules! books {
    ($( $num:literal $name:literal [$($alias:literal),*] ),* $(,)?) => {
        [ $( Book { number: $num, name: $name, aliases: &[$($alias),*] } ),* ]
    };
}

/// The 66 books in Protestant canon order
pub static BOOKS: [Book; BOOK_COUNT as usize] = books![
    1 "Genesis" ["genesis", "gen", "ge"],
    2 "Exodus" ["exodus", "exo", "ex"],
    3 "Leviticus" ["leviticus", "lev", "le"],
    4 "Numbers" ["numbers", "num", "nu"],
    5 "Deuteronomy" ["deuteronomy", "deut", "de"],
    6 "Joshua" ["joshua", "josh", "jos"],
    7 "Judges" ["judges", "judg", "jdg"],
    8 "Ruth" ["ruth"],
    9 "1 Samuel" ["1samuel", "1sam", "1sa"],
    10 "2 Samuel" ["2samuel", "2sam", "2sa"],
    11 "1 Kings" ["1kings", "1kgs", "1ki"],
    12 "2 Kings" ["2kings", "2kgs", "2ki"],
    13 "1 Chronicles" ["1chronicles", "1chr", "1ch"],
    14 "2 Chronicles" ["2chronicles", "2chr", "2ch"],
    15 "Ezra" ["ezra"],
    16 "Nehemiah" ["nehemiah", "neh"],
    17 "Esther" ["esther", "esth"],
    18 "Job" ["job"],
    19 "Psalms" ["psalms", "psalm", "ps", "psa"],
    20 "Proverbs" ["proverbs", "prov", "pro", "pr"],
    21 "Ecclesiastes" ["ecclesiastes", "eccles", "ecc"],
    22 "Song of Solomon" ["songofsolomon", "songofsongs", "song", "sos"],
    23 "Isaiah" ["isaiah", "isa", "is"],
    24 "Jeremiah" ["jeremiah", "jer"],
    25 "Lamentations" ["lamentations", "lam"],
    26 "Ezekiel" ["ezekiel", "ezek", "eze"],
    27 "Daniel" ["daniel", "dan", "da"],
    28 "Hosea" ["hosea", "hos"],
    29 "Joel" ["joel"],
    30 "Amos" ["amos"],
    31 "Obadiah" ["obadiah", "obad", "ob"],
    32 "Jonah" ["jonah"],
    33 "Micah" ["micah", "mic"],
    34 "Nahum" ["nahum", "nah"],
    35 "Habakkuk" ["habakkuk", "hab"],
    36 "Zephaniah" ["zephaniah", "zeph", "zep"],
    37 "Haggai" ["haggai", "hag"],
    38 "Zechariah" ["zechariah", "zech", "zec"],
    39 "Malachi" ["malachi", "mal"],
    40 "Matthew" ["matthew", "matt", "mt"],
    41 "Mark" ["mark", "mk"],
    42 "Luke" ["luke", "lk"],
    43 "John" ["john", "jn"],
    44 "Acts" ["acts"],
    45 "Romans" ["romans", "rom", "ro"],
    46 "1 Corinthians" ["1corinthians", "1cor", "1co"],
    47 "2 Corinthians" ["2corinthians", "2cor", "2co"],
    48 "Galatians" ["galatians", "gal", "ga"],
    49 "Ephesians" ["ephesians", "eph", "ep"],
    50 "Philippians" ["philippians", "phil", "php"],
    51 "Colossians" ["colossians", "col"],
    52 "1 Thessalonians" ["1thessalonians", "1thess", "1th"],
    53 "2 Thessalonians" ["2thessalonians", "2thess", "2th"],
    54 "1 Timothy" ["1timothy", "1tim", "1ti"],
    55 "2 Timothy" ["2timothy", "2tim", "2ti"],
    56 "Titus" ["titus"],
    57 "Philemon" ["philemon", "philem", "phm"],
    58 "Hebrews" ["hebrews", "heb"],
    59 "James" ["james", "jas"],
    60 "1 Peter" ["1peter", "1pet", "1pe"],
    61 "2 Peter" ["2peter", "2pet", "2pe"],
    62 "1 John" ["1john", "1jn", "1jo"],
    63 "2 John" ["2john", "2jn", "2jo"],
    64 "3 John" ["3john", "3jn", "3jo"],
    65 "Jude" ["jude"],
    66 "Revelation" ["revelation", "rev", "re"],
];

static ALIAS_INDEX: Lazy<HashMap<&'static str, BookNumber>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for book in &BOOKS {
        if let Some(number) = BookNumber::new(u32::from(book.number)) {
            for alias in book.aliases {
                index.insert(*alias, number);
            }
        }
    }
    index
});

/// Lowercase a book token and drop whitespace and periods
#[must_use]
pub fn normalize_book_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve a book name, abbreviation or number to its canonical number.
///
/// # Examples
///
/// ```
/// use verse_solver::core::book::resolve_book;
///
/// assert_eq!(resolve_book("1 Cor.").map(|b| b.get()), Some(46));
/// assert_eq!(resolve_book("43").map(|b| b.get()), Some(43));
/// assert!(resolve_book("Zzyx").is_none());
/// ```
#[must_use]
pub fn resolve_book(token: &str) -> Option<BookNumber> {
    let normalized = normalize_book_token(token);
    if normalized.is_empty() {
        return None;
    }

    if normalized.chars().all(|c| c.is_ascii_digit()) {
        return normalized.parse::<u32>().ok().and_then(BookNumber::new);
    }

    ALIAS_INDEX.get(normalized.as_str()).copied()
}

/// Look up the table entry for a canonical book number
#[must_use]
pub fn book(number: BookNumber) -> &'static Book {
    &BOOKS[usize::from(number.get()) - 1]
}

/// Display name for a canonical book number
#[must_use]
pub fn book_name(number: BookNumber) -> &'static str {
    book(number).name
}
