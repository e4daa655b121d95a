//! Command-line interface for verse-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **lookup**: Resolve a CSV batch of references and write a CSV report
//! - **resolve**: Resolve a single reference
//! - **books**: List the canonical books and their accepted aliases
//!
//! ## Usage
//!
//! ```text
//! # Batch lookup, one JSON corpus per translation in ./bibles
//! verse-solver lookup verses.csv results.csv ./bibles
//!
//! # Single reference as JSON
//! verse-solver resolve "1 Cor 13:4-7" --bibles ./bibles -t esv --format json
//!
//! # Only load the KJV
//! verse-solver lookup verses.csv results.csv ./bibles --translations KJV --default-translation KJV
//! ```

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::catalog::store::{LibraryConfig, DEFAULT_TRANSLATION};
use crate::utils::validation::{parse_translation_list, validate_translation_id};

pub mod books;
pub mod lookup;
pub mod resolve;

#[derive(Parser)]
#[command(name = "verse-solver")]
#[command(version)]
#[command(about = "Resolve scripture references to clean verse text")]
#[command(
    long_about = "verse-solver looks up human-written scripture references such as \"1 Cor 13:4-7\" in one or more Bible translations.\n\nIt accepts full book names, common abbreviations and book numbers, expands verse ranges, and returns the verse text with markup removed and punctuation spacing normalized."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve every reference in a CSV file and write the results as CSV
    Lookup(lookup::LookupArgs),

    /// Resolve a single reference
    Resolve(resolve::ResolveArgs),

    /// List the canonical books and their aliases
    Books,
}

/// Options shared by commands that load translation corpora
#[derive(clap::Args)]
pub struct LibraryArgs {
    /// Translations to load (comma-separated); each needs <ID>.json or <ID>.json.gz
    #[arg(long, default_value = "NKJV,ESV,KJV")]
    pub translations: String,

    /// Translation used when a request does not name one
    #[arg(long, default_value = DEFAULT_TRANSLATION)]
    pub default_translation: String,
}

impl LibraryArgs {
    /// Build the library configuration from the command line
    ///
    /// # Errors
    ///
    /// Returns an error if a translation ID is blank or contains characters
    /// that cannot appear in a corpus file name.
    pub fn config(&self) -> anyhow::Result<LibraryConfig> {
        let config = LibraryConfig {
            translations: parse_translation_list(&self.translations)?,
            default_translation: validate_translation_id(&self.default_translation)?,
        };

        if !config.translations.contains(&config.default_translation) {
            warn!(
                "Default translation {} is not among the loaded translations",
                config.default_translation
            );
        }

        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
