//! Facade crate for the Abyssal grid scoring engine.
//!
//! This crate re-exports the domain types, the dataset loader and the scoring
//! pipeline so callers can depend on a single crate. Enable the `parallel`
//! feature to score cells on a rayon thread pool.
//!
//! ```no_run
//! use abyssal_engine::{Dataset, GridScorer, ScoreWeights};
//! use camino::Utf8Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = Dataset::load(Utf8Path::new("merged.csv"))?;
//! let report = GridScorer::new(ScoreWeights::CANONICAL)?.score_dataset(&dataset)?;
//! for cell in abyssal_engine::top_n(&report.ranked, 5) {
//!     println!("{} {:.2}", cell.cell.id, cell.score);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use abyssal_core::{
    CellId, CellRecord, CoralCover, Currents, FoodWebLink, Hazard, LifeForm, Literal,
    LiteralError, Resource, Severity, SurveyPoint, UNKNOWN_BIOME,
};

pub use abyssal_data::{Dataset, DatasetError, DatasetOptions, IdentityError, RawRow, parse_cell};

pub use abyssal_scorer::{
    CellDetail, CellSummary, ExportError, GridScorer, IdentityPolicy, ScoreError, ScoreReport,
    ScoreWeights, ScoredCell, SubMetrics, WeightPreset, WeightsError, rank, top_n,
    write_detailed_json, write_detailed_json_file, write_summary_csv, write_summary_csv_file,
};
