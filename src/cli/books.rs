use crate::cli::OutputFormat;
use crate::core::book::BOOKS;

/// Execute books subcommand
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{:<4}{:<18}Aliases", "#", "Book");
            println!("{}", "-".repeat(60));
            for book in &BOOKS {
                println!("{:<4}{:<18}{}", book.number, book.name, book.aliases.join(", "));
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = BOOKS
                .iter()
                .map(|book| {
                    serde_json::json!({
                        "number": book.number,
                        "name": book.name,
                        "aliases": book.aliases,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("number\tname\taliases");
            for book in &BOOKS {
                println!("{}\t{}\t{}", book.number, book.name, book.aliases.join(","));
            }
        }
    }

    Ok(())
}
