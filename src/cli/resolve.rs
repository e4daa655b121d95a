use std::path::PathBuf;

use clap::Args;

use crate::cli::{LibraryArgs, OutputFormat};
use crate::core::book::book_name;
use crate::core::reference::parse_reference;
use crate::matching::engine::VerseResolver;
use crate::matching::outcome::ResolutionResult;
use crate::parsing::corpus::load_library;

#[derive(Args)]
pub struct ResolveArgs {
    /// Reference to resolve, e.g. "John 3:16" or "1 Cor 13:4-7"
    #[arg(required = true)]
    pub reference: String,

    /// Directory holding one <ID>.json corpus per translation
    #[arg(short, long, required = true)]
    pub bibles: PathBuf,

    /// Translation to resolve in (defaults to --default-translation)
    #[arg(short, long)]
    pub translation: Option<String>,

    #[command(flatten)]
    pub library: LibraryArgs,
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the corpora cannot be loaded or the reference does
/// not resolve.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ResolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.library.config()?;
    let library = load_library(&args.bibles, &config)?;

    let translation = args
        .translation
        .as_deref()
        .unwrap_or(config.default_translation.as_str());

    let result = VerseResolver::new(&library).resolve(&args.reference, translation);

    match format {
        OutputFormat::Text => print_text_result(&result, verbose),
        OutputFormat::Json => print_json_result(&result)?,
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    match result.outcome {
        Ok(_) => Ok(()),
        Err(e) => Err(anyhow::anyhow!("{}: {e}", result.reference)),
    }
}

fn print_text_result(result: &ResolutionResult, verbose: bool) {
    let Some(text) = result.text() else {
        return;
    };

    println!("{} ({})", result.reference, result.translation);
    if verbose {
        if let Ok(parsed) = parse_reference(&result.reference) {
            println!("   Book: {} ({})", book_name(parsed.book), parsed.book);
            println!("   Canonical: {parsed}");
        }
    }
    println!("{text}");
}

fn print_json_result(result: &ResolutionResult) -> anyhow::Result<()> {
    let mut json = serde_json::json!({
        "reference": result.reference,
        "translation": result.translation,
    });

    match &result.outcome {
        Ok(text) => {
            json["text"] = serde_json::json!(text);
            if let Ok(parsed) = parse_reference(&result.reference) {
                json["parsed"] = serde_json::to_value(parsed)?;
            }
        }
        Err(e) => {
            json["error"] = serde_json::json!({
                "kind": e.kind(),
                "message": e.to_string(),
            });
        }
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_tsv_result(result: &ResolutionResult) {
    println!("reference\ttranslation\ttext");
    println!(
        "{}\t{}\t{}",
        result.reference,
        result.translation,
        result.display_text()
    );
}
