//! Error types emitted by the Abyssal CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use abyssal_data::DatasetError;
use abyssal_scorer::{ExportError, ScoreError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Abyssal CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A configured value is out of range.
    #[error("invalid {field} {value:?} (set --{field} or {env})")]
    InvalidArgument {
        field: &'static str,
        env: &'static str,
        value: String,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Loading the dataset failed.
    #[error("failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),
    /// Scoring failed.
    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),
    /// Writing an export file failed.
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}
