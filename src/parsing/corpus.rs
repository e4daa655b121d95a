//! Translation corpus loading.
//!
//! A corpus directory holds one JSON file per translation, named after the
//! translation ID. Both plain and gzip-compressed files are supported:
//!
//! - `NKJV.json`
//! - `NKJV.json.gz`
//!
//! Each file is an array of `{"book": 43, "chapter": 3, "verse": 16, "text": "..."}`
//! objects. `text` may be `null`.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::de::{self, SeqAccess, Visitor};
use thiserror::Error;
use tracing::info;

use crate::catalog::index::TranslationIndex;
use crate::catalog::store::{LibraryConfig, TranslationLibrary};
use crate::core::types::{RawVerseRecord, TranslationId, BOOK_COUNT};
use crate::utils::validation::{
    check_record_limit, validate_translation_id, ValidationError, MAX_RECORDS,
};

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{id}.json not found at {}", .dir.display())]
    MissingCorpus { id: TranslationId, dir: PathBuf },

    #[error("Invalid record #{position}: {reason}")]
    InvalidRecord { position: usize, reason: String },

    #[error("{0}")]
    TooManyRecords(String),

    #[error(transparent)]
    InvalidTranslation(#[from] ValidationError),
}

/// Locate the corpus file for a translation, preferring uncompressed JSON
#[must_use]
pub fn corpus_path(dir: &Path, id: &TranslationId) -> Option<PathBuf> {
    [format!("{id}.json"), format!("{id}.json.gz")]
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Parse and validate corpus records from JSON
///
/// Records are validated as they stream in, so an oversized or invalid file
/// is rejected without reading the rest of it.
///
/// # Errors
///
/// Returns `CorpusError::Json` if the input is not a JSON array of records,
/// `CorpusError::InvalidRecord` if a record has a book outside 1-66 or a zero
/// chapter/verse, or `CorpusError::TooManyRecords` if the limit is exceeded.
pub fn parse_corpus_json<R: Read>(reader: R) -> Result<Vec<RawVerseRecord>, CorpusError> {
    parse_records(reader, MAX_RECORDS)
}

fn parse_records<R: Read>(reader: R, max_records: usize) -> Result<Vec<RawVerseRecord>, CorpusError> {
    let mut failure = None;
    let mut deserializer = serde_json::Deserializer::from_reader(reader);

    let visitor = RecordVisitor {
        max_records,
        failure: &mut failure,
    };
    let records = match serde::Deserializer::deserialize_seq(&mut deserializer, visitor) {
        Ok(records) => records,
        Err(e) => return Err(failure.take().unwrap_or(CorpusError::Json(e))),
    };
    deserializer.end()?;

    Ok(records)
}

/// Collects records one array element at a time, stopping at the first bad one.
///
/// The typed error is parked in `failure`; serde only carries a message.
struct RecordVisitor<'a> {
    max_records: usize,
    failure: &'a mut Option<CorpusError>,
}

impl<'de> Visitor<'de> for RecordVisitor<'_> {
    type Value = Vec<RawVerseRecord>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of verse records")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut records = Vec::new();

        while let Some(record) = seq.next_element::<RawVerseRecord>()? {
            let error = match check_record_limit(records.len(), self.max_records) {
                Some(message) => Some(CorpusError::TooManyRecords(message)),
                // Positions in errors are 1-based for user friendliness
                None => invalid_record_reason(&record).map(|reason| CorpusError::InvalidRecord {
                    position: records.len() + 1,
                    reason,
                }),
            };

            if let Some(error) = error {
                let message = error.to_string();
                *self.failure = Some(error);
                return Err(de::Error::custom(message));
            }
            records.push(record);
        }

        Ok(records)
    }
}

fn invalid_record_reason(record: &RawVerseRecord) -> Option<String> {
    if record.key().is_none() {
        Some(format!("book {} is outside 1..={BOOK_COUNT}", record.book))
    } else if record.chapter == 0 || record.verse == 0 {
        Some(format!(
            "chapter and verse must be at least 1 (got {}:{})",
            record.chapter, record.verse
        ))
    } else {
        None
    }
}

/// Parse a corpus file, decompressing `.gz` files transparently
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, or any error from
/// [`parse_corpus_json`].
pub fn parse_corpus_file(path: &Path) -> Result<Vec<RawVerseRecord>, CorpusError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        parse_corpus_json(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_corpus_json(BufReader::new(file))
    }
}

/// Load the records of one translation from a corpus directory
///
/// # Errors
///
/// Returns `CorpusError::InvalidTranslation` for an unusable ID,
/// `CorpusError::MissingCorpus` if no file exists for it, or any error from
/// [`parse_corpus_file`].
pub fn load_translation(dir: &Path, id: &str) -> Result<Vec<RawVerseRecord>, CorpusError> {
    let id = validate_translation_id(id)?;
    let path = corpus_path(dir, &id).ok_or_else(|| CorpusError::MissingCorpus {
        id: id.clone(),
        dir: dir.to_path_buf(),
    })?;
    parse_corpus_file(&path)
}

/// Load and index every configured translation.
///
/// Loading stops at the first translation that fails.
///
/// # Errors
///
/// Returns the first error from [`load_translation`].
pub fn load_library(dir: &Path, config: &LibraryConfig) -> Result<TranslationLibrary, CorpusError> {
    let mut library = TranslationLibrary::new();

    for id in &config.translations {
        let records = load_translation(dir, id.as_str())?;
        let index = TranslationIndex::build(id.clone(), records);
        info!("Loaded {} ({} cleaned verses)", index.id(), index.len());
        library.add(index);
    }

    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    const CORPUS: &str = r#"[
        {"book": 43, "chapter": 3, "verse": 16, "text": "For God so loved the world"},
        {"book": 43, "chapter": 11, "verse": 35, "text": null}
    ]"#;

    #[test]
    fn test_parse_corpus_json() {
        let records = parse_corpus_json(CORPUS.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].book, 43);
        assert!(records[1].text.is_none());
    }

    #[test]
    fn test_rejects_non_canonical_book() {
        let json = r#"[{"book": 1, "chapter": 1, "verse": 1, "text": "a"},
                       {"book": 67, "chapter": 1, "verse": 1, "text": "b"}]"#;
        match parse_corpus_json(json.as_bytes()) {
            Err(CorpusError::InvalidRecord { position, .. }) => assert_eq!(position, 2),
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_zero_verse() {
        let json = r#"[{"book": 1, "chapter": 1, "verse": 0, "text": "a"}]"#;
        assert!(matches!(
            parse_corpus_json(json.as_bytes()),
            Err(CorpusError::InvalidRecord { position: 1, .. })
        ));
    }

    #[test]
    fn test_record_limit() {
        let json = r#"[{"book": 1, "chapter": 1, "verse": 1, "text": "a"},
                       {"book": 1, "chapter": 1, "verse": 2, "text": "b"}]"#;
        assert_eq!(parse_records(json.as_bytes(), 2).unwrap().len(), 2);

        let err = parse_records(json.as_bytes(), 1).unwrap_err();
        assert!(matches!(err, CorpusError::TooManyRecords(_)));
        assert!(err.to_string().contains("maximum of 1"));
    }

    #[test]
    fn test_record_limit_stops_before_rest_of_input() {
        // Everything after the record that crosses the limit is never parsed
        let json = r#"[{"book": 1, "chapter": 1, "verse": 1, "text": "a"},
                       {"book": 1, "chapter": 1, "verse": 2, "text": "b"},
                       {"book": "not a number"#;
        assert!(matches!(
            parse_records(json.as_bytes(), 1),
            Err(CorpusError::TooManyRecords(_))
        ));
    }

    #[test]
    fn test_invalid_record_stops_before_rest_of_input() {
        let json = r#"[{"book": 70, "chapter": 1, "verse": 1, "text": "a"}, {"#;
        assert!(matches!(
            parse_corpus_json(json.as_bytes()),
            Err(CorpusError::InvalidRecord { position: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_trailing_data() {
        let json = r#"[{"book": 1, "chapter": 1, "verse": 1, "text": "a"}] []"#;
        assert!(matches!(
            parse_corpus_json(json.as_bytes()),
            Err(CorpusError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            parse_corpus_json(r#"{"book": 1}"#.as_bytes()),
            Err(CorpusError::Json(_))
        ));
    }

    #[test]
    fn test_load_plain_and_gzipped() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("NKJV.json"), CORPUS).unwrap();

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CORPUS.as_bytes()).unwrap();
        std::fs::write(dir.path().join("ESV.json.gz"), encoder.finish().unwrap()).unwrap();

        assert_eq!(load_translation(dir.path(), "nkjv").unwrap().len(), 2);
        assert_eq!(load_translation(dir.path(), "ESV").unwrap().len(), 2);
    }

    #[test]
    fn test_missing_corpus() {
        let dir = TempDir::new().unwrap();
        let err = load_translation(dir.path(), "KJV").unwrap_err();
        assert!(matches!(err, CorpusError::MissingCorpus { .. }));
        assert!(err.to_string().starts_with("KJV.json not found at"));
    }

    #[test]
    fn test_rejects_path_like_ids() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_translation(dir.path(), "../NKJV"),
            Err(CorpusError::InvalidTranslation(_))
        ));
    }

    #[test]
    fn test_load_library() {
        let dir = TempDir::new().unwrap();
        for id in ["NKJV", "ESV", "KJV"] {
            std::fs::write(dir.path().join(format!("{id}.json")), CORPUS).unwrap();
        }

        let library = load_library(dir.path(), &LibraryConfig::default()).unwrap();
        assert_eq!(library.len(), 3);
        assert_eq!(library.describe_ids(), "NKJV, ESV, KJV");
        assert_eq!(library.get("esv").unwrap().len(), 2);
    }

    #[test]
    fn test_load_library_fails_on_missing_translation() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("NKJV.json"), CORPUS).unwrap();
        assert!(load_library(dir.path(), &LibraryConfig::default()).is_err());
    }
}
