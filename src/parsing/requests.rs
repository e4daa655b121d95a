use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::core::types::TranslationId;
use crate::matching::outcome::{ResolutionRequest, ResolutionResult};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse request rows: `reference[,translation]`, no header required.
///
/// A first row whose first cell is `reference` is taken as a header. Blank
/// translations fall back to `default_translation`. Every row yields one
/// request, so a row with no reference (`,` or `,ESV`) becomes an
/// empty-reference request and still gets a line in the report.
///
/// # Errors
///
/// Returns `RequestError::Csv` if the input is not valid CSV.
pub fn parse_requests<R: Read>(
    reader: R,
    default_translation: &TranslationId,
) -> Result<Vec<ResolutionRequest>, RequestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    let mut first_row = true;

    for record in reader.records() {
        let record = record?;

        if std::mem::take(&mut first_row)
            && record
                .get(0)
                .is_some_and(|cell| cell.eq_ignore_ascii_case("reference"))
        {
            continue;
        }

        let reference = record.get(0).unwrap_or_default();
        let translation = record.get(1).unwrap_or_default();
        let translation = if translation.is_empty() {
            default_translation.clone()
        } else {
            TranslationId::new(translation)
        };

        requests.push(ResolutionRequest::new(reference, translation.as_str()));
    }

    Ok(requests)
}

/// Read requests from a CSV file
///
/// # Errors
///
/// Returns `RequestError::Io` if the file cannot be opened, or any error
/// from [`parse_requests`].
pub fn read_requests_file(
    path: &Path,
    default_translation: &TranslationId,
) -> Result<Vec<ResolutionRequest>, RequestError> {
    let file = std::fs::File::open(path)?;
    parse_requests(file, default_translation)
}

/// Write results as CSV with a `reference,translation,text` header
///
/// # Errors
///
/// Returns `RequestError::Csv` or `RequestError::Io` if writing fails.
pub fn write_results<W: Write>(writer: W, results: &[ResolutionResult]) -> Result<(), RequestError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["reference", "translation", "text"])?;
    for result in results {
        writer.write_record([
            result.reference.as_str(),
            result.translation.as_str(),
            result.display_text().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write results to a CSV file, replacing it if it exists
///
/// # Errors
///
/// Returns any error from [`write_results`].
pub fn write_results_file(path: &Path, results: &[ResolutionResult]) -> Result<(), RequestError> {
    let file = std::fs::File::create(path)?;
    write_results(std::io::BufWriter::new(file), results)
}
