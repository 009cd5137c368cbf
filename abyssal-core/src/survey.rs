//! Survey points of interest and biome food-web links.
//!
//! Neither feeds the score; both are carried so consumers can display them
//! next to a ranked cell.

use crate::entry::{CollectionEntry, EntrySlots};

/// A point of interest recorded by survey teams (`poi_*` columns).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurveyPoint {
    /// Upstream identifier, kept as text.
    pub id: Option<String>,
    /// Category label, e.g. `"wreck"`.
    pub category: Option<String>,
    /// Short display label.
    pub label: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Research value assigned by surveyors.
    pub research_value: Option<f64>,
}

impl CollectionEntry for SurveyPoint {
    const PREFIX: &'static str = "poi";
    const FIELDS: &'static [&'static str] =
        &["id", "category", "label", "description", "research_value"];

    fn from_slots(slots: &EntrySlots<'_>) -> Self {
        Self {
            id: slots.text("id"),
            category: slots.text("category"),
            label: slots.text("label"),
            description: slots.text("description"),
            research_value: slots.number("research_value"),
        }
    }
}

/// A predator/prey interaction shared by every cell of a biome.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodWebLink {
    /// Predator species.
    pub predator: Option<String>,
    /// Prey species.
    pub prey: Option<String>,
    /// Strength of the interaction.
    pub interaction_strength: Option<f64>,
}

impl CollectionEntry for FoodWebLink {
    const PREFIX: &'static str = "biome";
    const FIELDS: &'static [&'static str] = &["predators", "prey", "interaction_strengths"];

    fn from_slots(slots: &EntrySlots<'_>) -> Self {
        Self {
            predator: slots.text("predators"),
            prey: slots.text("prey"),
            interaction_strength: slots.number("interaction_strengths"),
        }
    }
}
