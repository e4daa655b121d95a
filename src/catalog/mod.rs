//! Translation storage and indexing.
//!
//! Each translation corpus is cleaned once and stored in a
//! [`TranslationIndex`](index::TranslationIndex) keyed by (book, chapter, verse).
//! The loaded translations are grouped in a
//! [`TranslationLibrary`](store::TranslationLibrary), which is read-only once
//! built and may be shared freely between resolutions.
//!
//! ## Example
//!
//! ```rust
//! use verse_solver::catalog::index::TranslationIndex;
//! use verse_solver::catalog::store::TranslationLibrary;
//! use verse_solver::core::types::{RawVerseRecord, TranslationId};
//!
//! let records = vec![RawVerseRecord::new(43, 11, 35, "Jesus  wept .")];
//! let index = TranslationIndex::build(TranslationId::new("KJV"), records);
//!
//! let library: TranslationLibrary = std::iter::once(index).collect();
//! assert!(library.get("kjv").is_some());
//! ```

pub mod index;
pub mod store;
