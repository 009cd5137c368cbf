//! Raw rows read from the merged table.

use std::collections::BTreeMap;

/// One line of the source table: field name to raw text.
///
/// Rows are immutable once read. Fields missing from a short line are
/// absent rather than empty.
///
/// # Examples
/// ```
/// use abyssal_data::RawRow;
///
/// let row = RawRow::from_pairs(2, [("row", "4"), ("biome", "abyssal plain")]);
/// assert_eq!(row.get("biome"), Some("abyssal plain"));
/// assert_eq!(row.get("depth_m"), None);
/// assert_eq!(row.line(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRow {
    line: u64,
    fields: BTreeMap<String, String>,
}

impl RawRow {
    /// Construct a row read from `line` (1-based, header included).
    #[must_use]
    pub const fn new(line: u64, fields: BTreeMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// Construct a row from borrowed field/value pairs.
    #[must_use]
    pub fn from_pairs<'a, I>(line: u64, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let fields = pairs
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        Self::new(line, fields)
    }

    /// Source line the row was read from.
    #[must_use]
    pub const fn line(&self) -> u64 {
        self.line
    }

    /// Raw text for `field`, if the column was present on this line.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Iterate fields whose name starts with `prefix`.
    pub fn fields_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.fields
            .iter()
            .filter(move |(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
