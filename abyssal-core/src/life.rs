//! Life forms observed in a cell.

use crate::entry::{CollectionEntry, EntrySlots};

/// One life-form observation assembled from the `life_*` columns.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifeForm {
    /// Species name.
    pub species: Option<String>,
    /// Typical depth of the population in metres.
    pub avg_depth_m: Option<f64>,
    /// Population density.
    pub density: Option<f64>,
    /// Threat the species poses to operations.
    pub threat_level: Option<f64>,
    /// Behaviour label, e.g. `"territorial"`.
    pub behavior: Option<String>,
    /// Trophic level within the food web.
    pub trophic_level: Option<f64>,
    /// Prey species as written upstream.
    pub prey_species: Option<String>,
}

impl CollectionEntry for LifeForm {
    const PREFIX: &'static str = "life";
    const FIELDS: &'static [&'static str] = &[
        "species",
        "avg_depth_m",
        "density",
        "threat_level",
        "behavior",
        "trophic_level",
        "prey_species",
    ];

    fn from_slots(slots: &EntrySlots<'_>) -> Self {
        Self {
            species: slots.text("species"),
            avg_depth_m: slots.number("avg_depth_m"),
            density: slots.number("density"),
            threat_level: slots.number("threat_level"),
            behavior: slots.text("behavior"),
            trophic_level: slots.number("trophic_level"),
            prey_species: slots.text("prey_species"),
        }
    }
}
