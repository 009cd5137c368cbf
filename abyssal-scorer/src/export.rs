//! Writers for ranked results: a summary CSV and a detailed JSON array.

use std::io::{BufWriter, Write};

use abyssal_data::fs::create_utf8_file;
use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use thiserror::Error;

use crate::ScoredCell;

/// Column order of the summary CSV.
pub const SUMMARY_COLUMNS: [&str; 11] = [
    "row",
    "col",
    "lat",
    "lon",
    "score",
    "total_value",
    "difficulty",
    "env_impact",
    "hazard_score",
    "depth",
    "biome",
];

/// Errors raised while exporting scored cells.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Creating the output file failed.
    #[error("failed to create export file at {path}")]
    Create {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing CSV records failed.
    #[error("failed to write CSV export")]
    Csv(#[from] csv::Error),
    /// Serialising JSON failed.
    #[error("failed to write JSON export")]
    Json(#[from] serde_json::Error),
    /// Flushing buffered output failed.
    #[error("failed to flush export output")]
    Flush(#[source] std::io::Error),
}

/// Write the summary shape of `cells` as CSV.
///
/// The header row is written even when `cells` is empty.
///
/// # Errors
/// Returns [`ExportError::Csv`] when a record cannot be written.
///
/// # Examples
/// ```
/// use abyssal_core::{CellId, CellRecord};
/// use abyssal_scorer::{ScoredCell, SubMetrics, write_summary_csv};
///
/// let cell = ScoredCell {
///     cell: CellRecord::new(CellId::new(1, 2)),
///     metrics: SubMetrics::default(),
///     score: 4.5,
/// };
/// let mut out = Vec::new();
/// write_summary_csv(&mut out, &[cell]).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("row,col,lat,lon,score,"));
/// assert!(text.contains("\n1,2,0.0,0.0,4.5,"));
/// ```
pub fn write_summary_csv<W: Write>(writer: W, cells: &[ScoredCell]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(SUMMARY_COLUMNS)?;
    for cell in cells {
        csv_writer.serialize(cell.summary())?;
    }
    csv_writer.flush().map_err(ExportError::Flush)
}

/// Write the detailed shape of `cells` as a pretty-printed JSON array.
///
/// # Errors
/// Returns [`ExportError::Json`] when serialisation or writing fails.
pub fn write_detailed_json<W: Write>(writer: W, cells: &[ScoredCell]) -> Result<(), ExportError> {
    let details: Vec<_> = cells.iter().map(ScoredCell::detail).collect();
    serde_json::to_writer_pretty(writer, &details)?;
    Ok(())
}

/// Write the summary CSV to `path`, creating parent directories.
///
/// # Errors
/// Returns [`ExportError::Create`] when the file cannot be created and
/// propagates write failures.
pub fn write_summary_csv_file(path: &Utf8Path, cells: &[ScoredCell]) -> Result<(), ExportError> {
    let file = create(path)?;
    write_summary_csv(file, cells)?;
    info!("Wrote {} cells to {path}", cells.len());
    Ok(())
}

/// Write the detailed JSON to `path`, creating parent directories.
///
/// # Errors
/// See [`write_summary_csv_file`].
pub fn write_detailed_json_file(path: &Utf8Path, cells: &[ScoredCell]) -> Result<(), ExportError> {
    let mut writer = create(path)?;
    write_detailed_json(&mut writer, cells)?;
    writer.flush().map_err(ExportError::Flush)?;
    info!("Wrote {} cells to {path}", cells.len());
    Ok(())
}

fn create(path: &Utf8Path) -> Result<BufWriter<impl Write>, ExportError> {
    create_utf8_file(path)
        .map(BufWriter::new)
        .map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })
}
