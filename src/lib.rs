//! # verse-solver
//!
//! A library for resolving human-written scripture references to clean verse text.
//!
//! References arrive in many shapes: "John 3:16", "Jn 3:16", "1 Cor. 13:4-7",
//! "43 3:16". Verse corpora arrive with italic markup, psalm superscriptions,
//! stray quotes and uneven punctuation spacing.
//!
//! `verse-solver` parses the reference, maps the book to its canonical number,
//! looks the verse or range up in a pre-built per-translation index, and returns
//! text that has already been cleaned.
//!
//! ## Features
//!
//! - **Alias resolution**: Full names, common abbreviations and book numbers
//! - **Range expansion**: `13:4-7` joins every verse found, skipping gaps
//! - **Text cleaning**: Markup, quotes and punctuation spacing normalized once at load
//! - **Typed failures**: Each reference yields a result; a bad one never stops a batch
//!
//! ## Example
//!
//! ```rust
//! use verse_solver::catalog::index::TranslationIndex;
//! use verse_solver::catalog::store::TranslationLibrary;
//! use verse_solver::core::types::{RawVerseRecord, TranslationId};
//! use verse_solver::{ResolutionError, VerseResolver};
//!
//! let records = vec![
//!     RawVerseRecord::new(19, 23, 1, "<i>A Psalm of David.</i> The LORD is my shepherd ;"),
//!     RawVerseRecord::new(19, 23, 2, "He makes me to lie down in green pastures"),
//! ];
//! let library: TranslationLibrary =
//!     std::iter::once(TranslationIndex::build(TranslationId::new("NKJV"), records)).collect();
//!
//! let resolver = VerseResolver::new(&library);
//!
//! let result = resolver.resolve("Ps 23:1-2", "nkjv");
//! assert_eq!(
//!     result.text(),
//!     Some("The LORD is my shepherd; He makes me to lie down in green pastures")
//! );
//!
//! let result = resolver.resolve("John 3:16", "LXX");
//! assert!(matches!(result.error(), Some(ResolutionError::UnknownTranslation(_))));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Book table, reference grammar, text cleaning and key types
//! - [`catalog`]: Per-translation indexes and the translation library
//! - [`matching`]: The resolver and its result types
//! - [`parsing`]: Corpus JSON loading and CSV request/result codecs
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::index::TranslationIndex;
pub use crate::catalog::store::{LibraryConfig, TranslationLibrary};
pub use crate::core::reference::{parse_reference, ParsedReference, ReferenceError};
pub use crate::core::types::*;
pub use crate::matching::{ResolutionError, ResolutionRequest, ResolutionResult, VerseResolver};
