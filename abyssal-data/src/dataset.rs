//! Owned dataset handle with an explicit load/reload lifecycle.
//!
//! A [`Dataset`] is loaded once and then borrowed immutably by any number of
//! scoring runs. Reloading replaces the rows only when the new read
//! succeeds, so a failed reload leaves the previous snapshot intact.

use std::io::Read;

use abyssal_core::CellRecord;
use camino::{Utf8Path, Utf8PathBuf};
use csv::{ReaderBuilder, StringRecord};
use log::info;
use thiserror::Error;

use crate::fs::open_utf8_file;
use crate::{IdentityError, RawRow, parse_cell};

/// Options controlling how the delimited table is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The delimited content could not be read.
    #[error("failed to read dataset rows from {origin}")]
    Read {
        /// Path or description of the input.
        origin: String,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// `reload` was called on a dataset built from an in-memory reader.
    #[error("dataset was not loaded from a file and cannot be reloaded")]
    NoSource,
}

/// Rows of the merged seafloor table, fully resident in memory.
///
/// # Examples
/// ```
/// use abyssal_data::{Dataset, DatasetOptions};
///
/// let csv = "row,col,depth_m\n0,0,4000\n0,1,4100\n";
/// let dataset = Dataset::from_reader(csv.as_bytes(), DatasetOptions::default()).unwrap();
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.headers(), ["row", "col", "depth_m"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    source: Option<Utf8PathBuf>,
    options: DatasetOptions,
    headers: Vec<String>,
    rows: Vec<RawRow>,
}

const READER_ORIGIN: &str = "in-memory reader";

impl Dataset {
    /// Load a comma-delimited dataset from `path`.
    ///
    /// # Errors
    /// Returns [`DatasetError::Open`] when the file cannot be opened and
    /// [`DatasetError::Read`] when its content is not readable as a table.
    pub fn load(path: &Utf8Path) -> Result<Self, DatasetError> {
        Self::load_with(path, DatasetOptions::default())
    }

    /// Load a dataset from `path` using explicit read options.
    ///
    /// # Errors
    /// See [`Dataset::load`].
    pub fn load_with(path: &Utf8Path, options: DatasetOptions) -> Result<Self, DatasetError> {
        let (headers, rows) = read_file(path, options)?;
        info!("Loaded {} rows from {path}", rows.len());
        Ok(Self {
            source: Some(path.to_path_buf()),
            options,
            headers,
            rows,
        })
    }

    /// Read a dataset from any reader. Such datasets cannot be reloaded.
    ///
    /// # Errors
    /// Returns [`DatasetError::Read`] when the content is not readable as a
    /// table.
    pub fn from_reader<R: Read>(reader: R, options: DatasetOptions) -> Result<Self, DatasetError> {
        let (headers, rows) = read_rows(reader, options, READER_ORIGIN)?;
        Ok(Self {
            source: None,
            options,
            headers,
            rows,
        })
    }

    /// Re-read the dataset from its source file.
    ///
    /// On failure the previously loaded rows are kept.
    ///
    /// # Errors
    /// Returns [`DatasetError::NoSource`] for reader-backed datasets and
    /// propagates load failures otherwise.
    pub fn reload(&mut self) -> Result<(), DatasetError> {
        let path = self.source.as_deref().ok_or(DatasetError::NoSource)?;
        let (headers, rows) = read_file(path, self.options)?;
        info!("Reloaded {} rows from {path}", rows.len());
        self.headers = headers;
        self.rows = rows;
        Ok(())
    }

    /// Path the dataset was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Utf8Path> {
        self.source.as_deref()
    }

    /// Column names from the header line.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All raw rows in file order.
    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the dataset holds no data rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Parse every row into a cell, in file order.
    pub fn cells(&self) -> impl Iterator<Item = Result<CellRecord, IdentityError>> + '_ {
        self.rows.iter().map(parse_cell)
    }
}

type Table = (Vec<String>, Vec<RawRow>);

fn read_file(path: &Utf8Path, options: DatasetOptions) -> Result<Table, DatasetError> {
    let file = open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows(file, options, path.as_str())
}

fn read_rows<R: Read>(
    reader: R,
    options: DatasetOptions,
    origin: &str,
) -> Result<Table, DatasetError> {
    let read_error = |source| DatasetError::Read {
        origin: origin.to_owned(),
        source,
    };
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(|name| name.trim().to_owned())
        .collect();

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(read_error)?;
        rows.push(to_raw_row(&headers, &record));
    }
    Ok((headers, rows))
}

fn to_raw_row(headers: &[String], record: &StringRecord) -> RawRow {
    let line = record.position().map_or(0, csv::Position::line);
    let fields = headers
        .iter()
        .zip(record.iter())
        .map(|(name, value)| (name.clone(), value.to_owned()))
        .collect();
    RawRow::new(line, fields)
}
