//! Structured collection entries rebuilt from parallel literal columns.
//!
//! The flat table stores each multi-valued feature as several columns that
//! share a prefix, e.g. `resource_type`, `resource_abundance` and
//! `resource_purity`. The i-th element of every such column describes the
//! same entry. [`zip_entries`] performs that positional join once so the
//! rest of the engine works with whole entries instead of indices.

use crate::Literal;

/// A record assembled from the i-th element of a family of columns.
pub trait CollectionEntry: Sized {
    /// Column prefix shared by the entry's fields, without the trailing `_`.
    const PREFIX: &'static str;
    /// Field suffixes, in the order columns are passed to [`zip_entries`].
    const FIELDS: &'static [&'static str];

    /// Build one entry from the values found at a single position.
    fn from_slots(slots: &EntrySlots<'_>) -> Self;

    /// Iterate the full column names for this entry family.
    ///
    /// # Examples
    /// ```
    /// use abyssal_core::{CollectionEntry, Hazard};
    ///
    /// let names: Vec<String> = Hazard::column_names().collect();
    /// assert_eq!(names, ["hazard_type", "hazard_severity", "hazard_notes"]);
    /// ```
    fn column_names() -> impl Iterator<Item = String> {
        Self::FIELDS
            .iter()
            .map(|field| format!("{}_{field}", Self::PREFIX))
    }
}

/// Values found at one position across an entry's columns.
///
/// A field is `None` when its column is shorter than the position being
/// assembled.
#[derive(Debug)]
pub struct EntrySlots<'a> {
    slots: Vec<(&'static str, Option<&'a Literal>)>,
}

impl<'a> EntrySlots<'a> {
    /// Return the raw literal for `field`, if present.
    #[must_use]
    pub fn literal(&self, field: &str) -> Option<&'a Literal> {
        self.slots
            .iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, value)| *value)
    }

    /// Return `field` as a finite number, skipping non-numeric values.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.literal(field).and_then(Literal::as_f64)
    }

    /// Return `field` as a text label.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<String> {
        self.literal(field).and_then(Literal::to_label)
    }
}

/// Join parallel columns into structured entries by position.
///
/// `columns` must follow the order of [`CollectionEntry::FIELDS`]; missing
/// trailing columns are treated as empty. The number of entries equals the
/// longest column so that no value is silently dropped.
///
/// # Examples
/// ```
/// use abyssal_core::{Literal, Resource, zip_entries};
///
/// let columns = vec![
///     vec![Literal::Text("cobalt".into()), Literal::Text("nickel".into())],
///     vec![],
///     vec![Literal::Number(2.0)],
/// ];
/// let resources: Vec<Resource> = zip_entries(&columns);
/// assert_eq!(resources.len(), 2);
/// assert_eq!(resources[0].abundance, Some(2.0));
/// assert_eq!(resources[1].abundance, None);
/// ```
#[must_use]
pub fn zip_entries<E: CollectionEntry>(columns: &[Vec<Literal>]) -> Vec<E> {
    let len = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..len)
        .map(|index| {
            let slots = E::FIELDS
                .iter()
                .enumerate()
                .map(|(position, field)| {
                    let value = columns
                        .get(position)
                        .and_then(|column| column.get(index));
                    (*field, value)
                })
                .collect();
            E::from_slots(&EntrySlots { slots })
        })
        .collect()
}

/// Report whether all non-empty columns share the same length.
///
/// Empty columns are ignored because upstream tables often omit whole
/// fields for a feature.
#[must_use]
pub fn columns_aligned(columns: &[Vec<Literal>]) -> bool {
    let mut lengths = columns.iter().map(Vec::len).filter(|len| *len > 0);
    lengths
        .next()
        .is_none_or(|first| lengths.all(|len| len == first))
}
