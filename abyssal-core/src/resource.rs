//! Extractable resources deposited in a cell.

use crate::entry::{CollectionEntry, EntrySlots};

/// One resource deposit assembled from the `resource_*` columns.
///
/// Numeric fields are `None` when the column was shorter than the others or
/// held a non-numeric value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    /// Resource type, e.g. `"cobalt crust"`.
    pub kind: Option<String>,
    /// Broader resource family.
    pub family: Option<String>,
    /// Relative abundance of the deposit.
    pub abundance: Option<f64>,
    /// Purity of the deposit.
    pub purity: Option<f64>,
    /// Effort required to extract the deposit.
    pub extraction_difficulty: Option<f64>,
    /// Environmental cost of extraction.
    pub environmental_impact: Option<f64>,
    /// Economic value per unit.
    pub economic_value: Option<f64>,
    /// Free-form description.
    pub description: Option<String>,
}

impl Resource {
    /// Worth of the deposit: value × abundance × purity.
    ///
    /// Returns `None` unless all three factors are present.
    ///
    /// # Examples
    /// ```
    /// use abyssal_core::Resource;
    ///
    /// let resource = Resource {
    ///     economic_value: Some(10.0),
    ///     abundance: Some(2.0),
    ///     purity: Some(0.5),
    ///     ..Resource::default()
    /// };
    /// assert_eq!(resource.worth(), Some(10.0));
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "worth is the product of three measured factors"
    )]
    #[must_use]
    pub fn worth(&self) -> Option<f64> {
        Some(self.economic_value? * self.abundance? * self.purity?)
    }
}

impl CollectionEntry for Resource {
    const PREFIX: &'static str = "resource";
    const FIELDS: &'static [&'static str] = &[
        "type",
        "family",
        "abundance",
        "purity",
        "extraction_difficulty",
        "environmental_impact",
        "economic_value",
        "description",
    ];

    fn from_slots(slots: &EntrySlots<'_>) -> Self {
        Self {
            kind: slots.text("type"),
            family: slots.text("family"),
            abundance: slots.number("abundance"),
            purity: slots.number("purity"),
            extraction_difficulty: slots.number("extraction_difficulty"),
            environmental_impact: slots.number("environmental_impact"),
            economic_value: slots.number("economic_value"),
            description: slots.text("description"),
        }
    }
}
