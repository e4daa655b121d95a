//! Core data types and text handling for verse resolution.
//!
//! This module provides the fundamental pieces used throughout the library:
//!
//! - [`types`]: [`BookNumber`](types::BookNumber), [`VerseKey`](types::VerseKey),
//!   [`TranslationId`](types::TranslationId) and [`RawVerseRecord`](types::RawVerseRecord)
//! - [`book`]: The canonical book table and alias resolution
//! - [`reference`]: Parsing of human-written references into canonical parts
//! - [`clean`]: The verse text cleaning pipeline
//!
//! ## Reference Grammar
//!
//! | Form | Example | Meaning |
//! |------|---------|---------|
//! | `<book> <c>:<v>` | `John 3:16` | Single verse |
//! | `<book> <c>:<v1>-<v2>` | `1 Cor 13:4-7` | Inclusive verse range |
//! | `<n> <c>:<v>` | `43 3:16` | Book given by canonical number |
//!
//! Book tokens are matched against a fixed alias table only; there is no
//! fuzzy or typo-tolerant matching.

pub mod book;
pub mod clean;
pub mod reference;
pub mod types;
