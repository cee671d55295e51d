//! Percent change report, written as CSV.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::signals::Ranking;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct PercentChangeRow<'a> {
    #[serde(rename = "Stock Symbol")]
    symbol: &'a str,
    #[serde(rename = "Percent Change")]
    percent_change: f64,
}

/// One row per ranked symbol, in ranking order, under the header
/// `Stock Symbol,Percent Change`.
pub fn write_percent_changes<W: Write>(writer: W, ranking: &Ranking) -> Result<(), OutputError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    // Header is written explicitly so an empty ranking still yields it.
    wtr.write_record(["Stock Symbol", "Percent Change"])?;
    for entry in ranking.entries() {
        wtr.serialize(PercentChangeRow {
            symbol: &entry.symbol,
            percent_change: entry.percent_change,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_percent_changes_to_path<P: AsRef<Path>>(path: P, ranking: &Ranking) -> Result<(), OutputError> {
    if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_percent_changes(file, ranking)
}
