//! Readers and writers for the data that surrounds resolution.
//!
//! This module provides:
//!
//! - **Translation corpora** ([`corpus`]): JSON arrays of verse records, one
//!   file per translation, optionally gzip-compressed
//! - **Request batches** ([`requests`]): CSV rows of `reference[,translation]`
//! - **Result reports** ([`requests`]): CSV rows of `reference,translation,text`
//!
//! ## Example
//!
//! ```rust,no_run
//! use verse_solver::catalog::store::LibraryConfig;
//! use verse_solver::parsing::corpus::load_library;
//! use verse_solver::parsing::requests::read_requests_file;
//! use std::path::Path;
//!
//! let config = LibraryConfig::default();
//! let library = load_library(Path::new("./bibles"), &config).unwrap();
//! let requests = read_requests_file(Path::new("verses.csv"), &config.default_translation).unwrap();
//! ```
//!
//! ## Request Columns
//!
//! | Column | Description | Required |
//! |--------|-------------|----------|
//! | 0 | Reference, e.g. `1 Cor 13:4-7` | Yes |
//! | 1 | Translation ID, case-insensitive | No (defaults to NKJV) |

pub mod corpus;
pub mod requests;
