//! Reference resolution against loaded translations.
//!
//! - [`VerseResolver`]: Main entry point; turns a reference and translation into a result
//! - [`ResolutionResult`]: The resolved text or a [`ResolutionError`] for one reference
//!
//! ## Resolution Steps
//!
//! 1. **Blank check**: an empty reference is `EmptyReference`
//! 2. **Translation**: the translation must be loaded, else `UnknownTranslation`
//! 3. **Parsing**: the reference must match the grammar and name a known book
//! 4. **Lookup**: a single verse must exist (`VerseNotFound`); a range joins the
//!    verses that exist, in ascending order, and fails only if none do (`RangeNotFound`)
//!
//! A failure never stops a batch: every request gets its own result.
//!
//! ## Example
//!
//! ```rust
//! use verse_solver::catalog::index::TranslationIndex;
//! use verse_solver::catalog::store::TranslationLibrary;
//! use verse_solver::core::types::{RawVerseRecord, TranslationId};
//! use verse_solver::VerseResolver;
//!
//! let index = TranslationIndex::build(
//!     TranslationId::new("KJV"),
//!     vec![RawVerseRecord::new(43, 11, 35, "Jesus wept.")],
//! );
//! let library: TranslationLibrary = std::iter::once(index).collect();
//!
//! let result = VerseResolver::new(&library).resolve("Jn 11:35", "kjv");
//! assert_eq!(result.text(), Some("Jesus wept."));
//! ```

pub mod engine;
pub mod outcome;

pub use engine::VerseResolver;
pub use outcome::{ResolutionError, ResolutionRequest, ResolutionResult};
