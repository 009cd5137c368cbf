//! Hazards and the fixed severity scale used to weigh them.

use std::fmt;
use std::str::FromStr;

use crate::Literal;
use crate::entry::{CollectionEntry, EntrySlots};

/// Hazard severity labels recognised by the scoring engine.
///
/// # Examples
/// ```
/// use abyssal_core::Severity;
///
/// let severity: Severity = "extreme".parse().unwrap();
/// assert_eq!(severity.weight(), 5);
/// assert_eq!(severity.to_string(), "extreme");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Minor hazard.
    Low,
    /// Moderate hazard.
    Medium,
    /// Serious hazard.
    High,
    /// Hazard that should usually rule a site out.
    Extreme,
}

impl Severity {
    /// Contribution of this severity to a cell's hazard score.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Extreme => 5,
        }
    }

    /// Return the severity as its lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Labels match exactly after trimming; the upstream vocabulary is
    /// lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "extreme" => Ok(Self::Extreme),
            _ => Err(format!("unknown severity '{s}'")),
        }
    }
}

/// One hazard assembled from the `hazard_*` columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hazard {
    /// Hazard type, e.g. `"methane seep"`.
    pub kind: Option<String>,
    /// Raw severity label as written upstream.
    pub severity: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl Hazard {
    /// Resolve the severity label, if it is one of the known levels.
    #[must_use]
    pub fn severity_level(&self) -> Option<Severity> {
        self.severity.as_deref()?.parse().ok()
    }
}

impl CollectionEntry for Hazard {
    const PREFIX: &'static str = "hazard";
    const FIELDS: &'static [&'static str] = &["type", "severity", "notes"];

    fn from_slots(slots: &EntrySlots<'_>) -> Self {
        Self {
            kind: slots.text("type"),
            severity: slots.literal("severity").and_then(|value| match value {
                Literal::Text(label) => Some(label.clone()),
                _ => None,
            }),
            notes: slots.text("notes"),
        }
    }
}
