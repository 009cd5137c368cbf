//! Scoring and ranking for Abyssal grid cells.
//!
//! Each parsed cell is reduced to four [`SubMetrics`], combined into one
//! signed score by a [`ScoreWeights`] vector and ranked best first:
//!
//! ```text
//! score = value * total_value
//!       - difficulty * difficulty
//!       - impact * env_impact
//!       - hazard * hazard_score
//! ```
//!
//! [`GridScorer`] runs the whole pipeline over a dataset and reports rows it
//! had to reject. Results can be exported with [`write_summary_csv`] and
//! [`write_detailed_json`].
//!
//! # Examples
//!
//! ```
//! use abyssal_data::{Dataset, DatasetOptions};
//! use abyssal_scorer::{GridScorer, ScoreWeights, top_n};
//!
//! let csv = "row,col,hazard_severity\n0,0,['high']\n0,1,[]\n";
//! let dataset = Dataset::from_reader(csv.as_bytes(), DatasetOptions::default()).unwrap();
//! let report = GridScorer::new(ScoreWeights::FULL_WEIGHT)
//!     .unwrap()
//!     .score_dataset(&dataset)
//!     .unwrap();
//! let best = top_n(&report.ranked, 1);
//! assert_eq!(best[0].cell.id.col, 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod export;
mod metrics;
mod rank;
mod scored;
mod weights;

pub use engine::{GridScorer, IdentityPolicy, ScoreError, ScoreReport};
pub use export::{
    ExportError, SUMMARY_COLUMNS, write_detailed_json, write_detailed_json_file,
    write_summary_csv, write_summary_csv_file,
};
pub use metrics::{CORAL_COVER_DIVISOR, LIFE_DENSITY_FACTOR, LIFE_THREAT_FACTOR, SubMetrics};
pub use rank::{rank, top_n};
pub use scored::{CellDetail, CellSummary, ScoredCell};
pub use weights::{ScoreWeights, WeightPreset, WeightsError};

#[cfg(test)]
mod tests;
