//! Batch scoring: parse, aggregate, compose and rank a whole dataset.
//!
//! With the `parallel` feature rows are scored on the rayon thread pool.
//! Results are gathered in input order before the stable sort, so both
//! paths produce identical rankings.

use std::fmt;
use std::str::FromStr;

use abyssal_core::CellRecord;
use abyssal_data::{Dataset, IdentityError, RawRow, parse_cell};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ScoreWeights, ScoredCell, SubMetrics, WeightsError, rank};

/// What to do with rows whose `row`/`col` identity cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityPolicy {
    /// Drop the row, log a warning and report it in [`ScoreReport::rejected`].
    #[default]
    Skip,
    /// Fail the whole run on the first bad row.
    Abort,
}

impl IdentityPolicy {
    /// Return the policy as its lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for IdentityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(format!("unknown identity policy '{s}'")),
        }
    }
}

/// Errors raised by [`GridScorer`].
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The weight vector was rejected.
    #[error("invalid score weights")]
    InvalidWeights(#[from] WeightsError),
    /// A row had no usable identity under [`IdentityPolicy::Abort`].
    #[error("row rejected")]
    Identity(#[from] IdentityError),
}

/// Outcome of scoring a batch of rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreReport {
    /// Scored cells, best first.
    pub ranked: Vec<ScoredCell>,
    /// Rows skipped because their identity could not be parsed, in input
    /// order.
    pub rejected: Vec<IdentityError>,
}

/// Scores cells with a fixed, validated weight vector.
///
/// # Examples
/// ```
/// use abyssal_data::{Dataset, DatasetOptions};
/// use abyssal_scorer::{GridScorer, ScoreWeights};
///
/// let csv = "row,col,resource_economic_value,resource_abundance,resource_purity\n\
///            0,0,[10.0],[2.0],[0.5]\n\
///            0,1,[20.0],[2.0],[0.5]\n";
/// let dataset = Dataset::from_reader(csv.as_bytes(), DatasetOptions::default()).unwrap();
/// let scorer = GridScorer::new(ScoreWeights::default()).unwrap();
/// let report = scorer.score_dataset(&dataset).unwrap();
/// assert_eq!(report.ranked[0].cell.id.col, 1);
/// assert_eq!(report.ranked[0].score, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridScorer {
    weights: ScoreWeights,
    policy: IdentityPolicy,
}

impl GridScorer {
    /// Construct a scorer, validating `weights`.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidWeights`] when a weight is not finite.
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreError> {
        Ok(Self {
            weights: weights.validate()?,
            policy: IdentityPolicy::default(),
        })
    }

    /// Replace the identity policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: IdentityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Identity policy in use.
    #[must_use]
    pub const fn policy(&self) -> IdentityPolicy {
        self.policy
    }

    /// Aggregate and score one parsed cell.
    #[must_use]
    pub fn score_cell(&self, cell: CellRecord) -> ScoredCell {
        let metrics = SubMetrics::aggregate(&cell);
        let score = self.weights.compose(&metrics);
        ScoredCell {
            cell,
            metrics,
            score,
        }
    }

    /// Score every row of `dataset` and rank the results.
    ///
    /// # Errors
    /// Returns [`ScoreError::Identity`] for the first bad row when the policy
    /// is [`IdentityPolicy::Abort`].
    pub fn score_dataset(&self, dataset: &Dataset) -> Result<ScoreReport, ScoreError> {
        self.score_rows(dataset.rows())
    }

    /// Score raw rows and rank the results.
    ///
    /// # Errors
    /// See [`GridScorer::score_dataset`].
    pub fn score_rows(&self, rows: &[RawRow]) -> Result<ScoreReport, ScoreError> {
        let mut scored = Vec::with_capacity(rows.len());
        let mut rejected = Vec::new();
        for outcome in self.evaluate(rows) {
            match outcome {
                Ok(cell) => scored.push(cell),
                Err(err) => match self.policy {
                    IdentityPolicy::Abort => return Err(ScoreError::Identity(err)),
                    IdentityPolicy::Skip => {
                        warn!("Skipping row: {err}");
                        rejected.push(err);
                    }
                },
            }
        }
        info!(
            "Scored {} cells ({} rows skipped)",
            scored.len(),
            rejected.len()
        );
        Ok(ScoreReport {
            ranked: rank(scored),
            rejected,
        })
    }

    fn score_row(&self, row: &RawRow) -> Result<ScoredCell, IdentityError> {
        parse_cell(row).map(|cell| self.score_cell(cell))
    }

    #[cfg(feature = "parallel")]
    fn evaluate(&self, rows: &[RawRow]) -> Vec<Result<ScoredCell, IdentityError>> {
        use rayon::prelude::*;

        rows.par_iter().map(|row| self.score_row(row)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate(&self, rows: &[RawRow]) -> Vec<Result<ScoredCell, IdentityError>> {
        rows.iter().map(|row| self.score_row(row)).collect()
    }
}
