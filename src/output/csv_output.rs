use crate::state::CollectionResult;
use crate::HarvestError;
use std::io::Write;
use std::path::Path;

/// Header row of the results file
pub const CSV_HEADER: [&str; 2] = ["URL", "Email"];

/// Writes the collection as CSV to any writer
///
/// One header row, then one `(url, email)` row per email in collection
/// order.
pub fn write_results<W: Write>(results: &CollectionResult, writer: W) -> Result<(), HarvestError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for (url, email) in results.rows() {
        csv_writer.write_record([url, email])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Saves the collection to a CSV file, replacing any existing file
///
/// # Arguments
///
/// * `results` - The collected emails
/// * `path` - Destination file
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(HarvestError)` - The file could not be created or written
pub fn save_results(results: &CollectionResult, path: &Path) -> Result<(), HarvestError> {
    let file = std::fs::File::create(path)?;
    write_results(results, file)?;

    tracing::info!("Results saved to {}", path.display());
    Ok(())
}
