//! Weight vectors applied by the score composer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SubMetrics;

/// Multipliers for each sub-metric.
///
/// Value counts in the cell's favour; the other three are penalties. Any
/// finite weight is accepted, including zero and negative values.
///
/// # Examples
/// ```
/// use abyssal_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights, ScoreWeights::CANONICAL);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Multiplier applied to `total_value`.
    pub value: f64,
    /// Multiplier applied to `difficulty`.
    pub difficulty: f64,
    /// Multiplier applied to `env_impact`.
    pub impact: f64,
    /// Multiplier applied to `hazard_score`.
    pub hazard: f64,
}

/// Weights rejected by [`ScoreWeights::validate`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum WeightsError {
    /// A weight was NaN or infinite.
    #[error("weight `{field}` must be finite")]
    NonFinite {
        /// Name of the offending weight.
        field: &'static str,
    },
}

impl ScoreWeights {
    /// Engine default: environmental impact and hazards weigh double.
    pub const CANONICAL: Self = Self {
        value: 1.0,
        difficulty: 1.0,
        impact: 2.0,
        hazard: 2.0,
    };

    /// Heavier penalties for impact and hazards, as used by the command line
    /// report.
    pub const FULL_WEIGHT: Self = Self {
        value: 1.0,
        difficulty: 1.0,
        impact: 5.0,
        hazard: 10.0,
    };

    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::NonFinite`] naming the first weight that is
    /// NaN or infinite.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let fields = [
            ("value", self.value),
            ("difficulty", self.difficulty),
            ("impact", self.impact),
            ("hazard", self.hazard),
        ];
        fields
            .into_iter()
            .find(|(_, weight)| !weight.is_finite())
            .map_or(Ok(self), |(field, _)| Err(WeightsError::NonFinite { field }))
    }

    /// Combine sub-metrics into a single signed score.
    ///
    /// No clamping or normalisation is applied.
    ///
    /// # Examples
    /// ```
    /// use abyssal_scorer::{ScoreWeights, SubMetrics};
    ///
    /// let metrics = SubMetrics {
    ///     total_value: 10.0,
    ///     difficulty: 5.0,
    ///     env_impact: 0.0,
    ///     hazard_score: 4.0,
    /// };
    /// assert_eq!(ScoreWeights::default().compose(&metrics), -3.0);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is a linear combination of sub-metrics"
    )]
    #[must_use]
    pub fn compose(&self, metrics: &SubMetrics) -> f64 {
        weighted(self.value, metrics.total_value)
            - weighted(self.difficulty, metrics.difficulty)
            - weighted(self.impact, metrics.env_impact)
            - weighted(self.hazard, metrics.hazard_score)
    }
}

/// A zero weight drops its term even when the sub-metric overflowed.
#[expect(clippy::float_arithmetic, reason = "weighting a sub-metric")]
fn weighted(weight: f64, metric: f64) -> f64 {
    if weight == 0.0 { 0.0 } else { weight * metric }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Named weight vectors selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPreset {
    /// [`ScoreWeights::CANONICAL`].
    #[default]
    Canonical,
    /// [`ScoreWeights::FULL_WEIGHT`].
    Full,
}

impl WeightPreset {
    /// Weights represented by the preset.
    #[must_use]
    pub const fn weights(self) -> ScoreWeights {
        match self {
            Self::Canonical => ScoreWeights::CANONICAL,
            Self::Full => ScoreWeights::FULL_WEIGHT,
        }
    }

    /// Return the preset as its lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for WeightPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "full" => Ok(Self::Full),
            _ => Err(format!("unknown weight preset '{s}'")),
        }
    }
}
