//! Scored cells and their serialisable views.

use abyssal_core::CellRecord;
use serde::Serialize;

use crate::SubMetrics;

/// A parsed cell together with its sub-metrics and final score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCell {
    /// The parsed cell.
    pub cell: CellRecord,
    /// Sub-metrics the score was composed from.
    pub metrics: SubMetrics,
    /// Weighted score; higher is better and may be negative.
    pub score: f64,
}

/// Flat summary of a scored cell, one CSV row per cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSummary<'a> {
    /// Grid row.
    pub row: u32,
    /// Grid column.
    pub col: u32,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Weighted score.
    pub score: f64,
    /// Total resource value.
    pub total_value: f64,
    /// Mean extraction difficulty.
    pub difficulty: f64,
    /// Environmental impact.
    pub env_impact: f64,
    /// Hazard score.
    pub hazard_score: f64,
    /// Water depth in metres.
    pub depth: f64,
    /// Biome label.
    pub biome: &'a str,
}

/// Detailed view of a scored cell, including physical readings and the
/// labels of its hazards, resources and life forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellDetail<'a> {
    /// Summary fields, flattened into the same object.
    #[serde(flatten)]
    pub summary: CellSummary<'a>,
    /// Ambient pressure in atmospheres.
    pub pressure: f64,
    /// Water temperature in degrees Celsius.
    pub temp: f64,
    /// Hazard types, one per hazard entry; unlabelled entries are `None`.
    pub hazards: Vec<Option<&'a str>>,
    /// Resource types, one per resource entry.
    pub resources: Vec<Option<&'a str>>,
    /// Life-form species, one per life entry.
    pub life: Vec<Option<&'a str>>,
}

impl ScoredCell {
    /// Borrow the summary view of this cell.
    #[must_use]
    pub fn summary(&self) -> CellSummary<'_> {
        let cell = &self.cell;
        CellSummary {
            row: cell.id.row,
            col: cell.id.col,
            lat: cell.lat(),
            lon: cell.lon(),
            score: self.score,
            total_value: self.metrics.total_value,
            difficulty: self.metrics.difficulty,
            env_impact: self.metrics.env_impact,
            hazard_score: self.metrics.hazard_score,
            depth: cell.depth_m,
            biome: &cell.biome,
        }
    }

    /// Borrow the detailed view of this cell.
    ///
    /// Entries without a label are left out of the label lists.
    #[must_use]
    pub fn detail(&self) -> CellDetail<'_> {
        let cell = &self.cell;
        CellDetail {
            summary: self.summary(),
            pressure: cell.pressure_atm,
            temp: cell.temperature_c,
            hazards: cell
                .hazards
                .iter()
                .map(|hazard| hazard.kind.as_deref())
                .collect(),
            resources: cell
                .resources
                .iter()
                .map(|resource| resource.kind.as_deref())
                .collect(),
            life: cell
                .life
                .iter()
                .map(|life| life.species.as_deref())
                .collect(),
        }
    }
}
