use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::{LibraryArgs, OutputFormat};
use crate::matching::engine::VerseResolver;
use crate::parsing::corpus::load_library;
use crate::parsing::requests::{read_requests_file, write_results_file};

#[derive(Args)]
pub struct LookupArgs {
    /// Input CSV: reference[,translation] per row, header optional
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output CSV with reference, translation and text columns
    #[arg(required = true)]
    pub output: PathBuf,

    /// Directory holding one <ID>.json corpus per translation
    #[arg(required = true)]
    pub bibles: PathBuf,

    #[command(flatten)]
    pub library: LibraryArgs,
}

/// Execute lookup subcommand
///
/// # Errors
///
/// Returns an error if the corpus directory is missing, a corpus cannot be
/// loaded, or the input or output CSV cannot be read or written. Individual
/// references that fail to resolve are reported in the output instead.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LookupArgs, format: OutputFormat) -> anyhow::Result<()> {
    if !args.bibles.is_dir() {
        anyhow::bail!("Bible folder not found: {}", args.bibles.display());
    }

    let config = args.library.config()?;
    let library = load_library(&args.bibles, &config)?;

    let requests = read_requests_file(&args.input, &config.default_translation)?;
    debug!(requests = requests.len(), input = %args.input.display(), "Read requests");

    let resolver = VerseResolver::new(&library);
    let results = resolver.resolve_all(&requests);
    write_results_file(&args.output, &results)?;

    let resolved = results.iter().filter(|r| r.is_ok()).count();
    let failed = results.len() - resolved;

    match format {
        OutputFormat::Text => {
            println!(
                "Success! {} verses processed and saved to: {}",
                results.len(),
                args.output.display()
            );
            if failed > 0 {
                println!("   {resolved} resolved, {failed} with errors");
            }
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "processed": results.len(),
                "resolved": resolved,
                "failed": failed,
                "output": args.output.display().to_string(),
                "translations": library.ids().map(|id| id.as_str()).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Tsv => {
            println!("processed\tresolved\tfailed\toutput");
            println!(
                "{}\t{resolved}\t{failed}\t{}",
                results.len(),
                args.output.display()
            );
        }
    }

    Ok(())
}
