//! Reduction of a cell's collections into four scalar sub-metrics.

use abyssal_core::{CellRecord, Hazard, Resource};
use serde::Serialize;

/// Divisor applied to coral cover percentage in the impact term.
pub const CORAL_COVER_DIVISOR: f64 = 10.0;
/// Multiplier applied to each life-form density.
pub const LIFE_DENSITY_FACTOR: f64 = 10.0;
/// Multiplier applied to each life-form threat level.
pub const LIFE_THREAT_FACTOR: f64 = 5.0;

/// Scalar figures derived from a single cell.
///
/// Every field is `0.0` for a cell with empty collections, except
/// `env_impact`, which still carries the coral term.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SubMetrics {
    /// Sum of value × abundance × purity over complete resource entries.
    pub total_value: f64,
    /// Mean extraction difficulty over resources that report one.
    pub difficulty: f64,
    /// Environmental cost of working the cell.
    pub env_impact: f64,
    /// Sum of hazard severity weights.
    pub hazard_score: f64,
}

impl SubMetrics {
    /// Aggregate the sub-metrics of `cell`.
    ///
    /// # Examples
    /// ```
    /// use abyssal_core::{CellId, CellRecord, Hazard};
    /// use abyssal_scorer::SubMetrics;
    ///
    /// let mut cell = CellRecord::new(CellId::new(0, 0));
    /// cell.hazards.push(Hazard {
    ///     severity: Some("extreme".into()),
    ///     ..Hazard::default()
    /// });
    /// cell.coral.cover_pct = 30.0;
    ///
    /// let metrics = SubMetrics::aggregate(&cell);
    /// assert_eq!(metrics.hazard_score, 5.0);
    /// assert_eq!(metrics.env_impact, 3.0);
    /// assert_eq!(metrics.total_value, 0.0);
    /// ```
    #[must_use]
    pub fn aggregate(cell: &CellRecord) -> Self {
        Self {
            total_value: total_value(&cell.resources),
            difficulty: mean_difficulty(&cell.resources),
            env_impact: env_impact(cell),
            hazard_score: hazard_score(&cell.hazards),
        }
    }
}

fn total_value(resources: &[Resource]) -> f64 {
    resources.iter().filter_map(Resource::worth).sum()
}

#[expect(
    clippy::float_arithmetic,
    reason = "difficulty is an arithmetic mean"
)]
fn mean_difficulty(resources: &[Resource]) -> f64 {
    let (sum, count) = resources
        .iter()
        .filter_map(|resource| resource.extraction_difficulty)
        .fold((0.0, 0_u32), |(sum, count), value| {
            (sum + value, count.saturating_add(1))
        });
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "impact is a weighted sum of measured terms"
)]
fn env_impact(cell: &CellRecord) -> f64 {
    let resource_impact: f64 = cell
        .resources
        .iter()
        .filter_map(|resource| resource.environmental_impact)
        .sum();
    let density: f64 = cell.life.iter().filter_map(|life| life.density).sum();
    let threat: f64 = cell
        .life
        .iter()
        .filter_map(|life| life.threat_level)
        .sum();
    resource_impact
        + cell.coral.cover_pct / CORAL_COVER_DIVISOR
        + density * LIFE_DENSITY_FACTOR
        + threat * LIFE_THREAT_FACTOR
}

fn hazard_score(hazards: &[Hazard]) -> f64 {
    hazards
        .iter()
        .filter_map(Hazard::severity_level)
        .map(|severity| f64::from(severity.weight()))
        .sum()
}
