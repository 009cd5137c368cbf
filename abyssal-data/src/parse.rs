//! Cell record parser: one [`RawRow`] in, one [`CellRecord`] out.
//!
//! Every per-field problem is recovered locally: non-numeric scalars become
//! `0.0` and malformed collection literals become empty collections. Only
//! the `row`/`col` identity can fail, and it does so with an explicit
//! [`IdentityError`] so callers never see synthetic `(0,0)` keys.

use abyssal_core::{
    CellId, CellRecord, CollectionEntry, CoralCover, Currents, FoodWebLink, Hazard, LifeForm,
    Literal, Resource, SurveyPoint, UNKNOWN_BIOME, columns_aligned, parse_collection,
    zip_entries,
};
use geo::Coord;
use log::debug;
use thiserror::Error;

use crate::RawRow;

/// Column holding the grid row.
pub const ROW_FIELD: &str = "row";
/// Column holding the grid column.
pub const COL_FIELD: &str = "col";
const CORAL_PREFIX: &str = "coral_";
const CORAL_COVER_FIELD: &str = "coral_coral_cover_pct";

/// A row whose grid identity could not be established.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The identity column is absent or blank.
    #[error("line {line}: missing `{field}` value")]
    Missing {
        /// Source line of the row.
        line: u64,
        /// Name of the identity column.
        field: &'static str,
    },
    /// The identity column is not a non-negative integer.
    #[error("line {line}: `{field}` value {raw:?} is not a non-negative integer")]
    Invalid {
        /// Source line of the row.
        line: u64,
        /// Name of the identity column.
        field: &'static str,
        /// Raw text found in the column.
        raw: String,
    },
}

impl IdentityError {
    /// Source line of the rejected row.
    #[must_use]
    pub const fn line(&self) -> u64 {
        match self {
            Self::Missing { line, .. } | Self::Invalid { line, .. } => *line,
        }
    }
}

/// Parse a raw row into a typed cell.
///
/// # Errors
/// Returns [`IdentityError`] when `row` or `col` is missing or not a
/// non-negative integer. No other field can cause a failure.
///
/// # Examples
/// ```
/// use abyssal_data::{RawRow, parse_cell};
///
/// let row = RawRow::from_pairs(
///     2,
///     [
///         ("row", "1"),
///         ("col", "2"),
///         ("depth_m", "not a number"),
///         ("hazard_severity", "['high', 'low']"),
///     ],
/// );
/// let cell = parse_cell(&row).unwrap();
/// assert_eq!(cell.depth_m, 0.0);
/// assert_eq!(cell.hazards.len(), 2);
/// ```
pub fn parse_cell(row: &RawRow) -> Result<CellRecord, IdentityError> {
    let id = CellId::new(identity(row, ROW_FIELD)?, identity(row, COL_FIELD)?);
    let mut cell = CellRecord::new(id);
    cell.location = Coord {
        x: scalar(row, "lon"),
        y: scalar(row, "lat"),
    };
    cell.depth_m = scalar(row, "depth_m");
    cell.pressure_atm = scalar(row, "pressure_atm");
    cell.temperature_c = scalar(row, "temperature_c");
    cell.biome = text(row, "biome").unwrap_or_else(|| UNKNOWN_BIOME.to_owned());
    cell.coral = coral(row);
    cell.currents = currents(row);
    cell.resources = entries::<Resource>(row);
    cell.hazards = entries::<Hazard>(row);
    cell.life = entries::<LifeForm>(row);
    cell.survey_points = entries::<SurveyPoint>(row);
    cell.food_web = entries::<FoodWebLink>(row);
    Ok(cell)
}

fn identity(row: &RawRow, field: &'static str) -> Result<u32, IdentityError> {
    let raw = row.get(field).map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(IdentityError::Missing {
            line: row.line(),
            field,
        });
    }
    parse_index(raw).ok_or_else(|| IdentityError::Invalid {
        line: row.line(),
        field,
        raw: raw.to_owned(),
    })
}

/// Accept plain integers and integral decimals such as `"3.0"`.
fn parse_index(raw: &str) -> Option<u32> {
    if let Ok(index) = raw.parse::<u32>() {
        return Some(index);
    }
    let (whole, fraction) = raw.split_once('.')?;
    if fraction.is_empty() || !fraction.chars().all(|ch| ch == '0') {
        return None;
    }
    whole.parse::<u32>().ok()
}

/// Read a numeric scalar, defaulting to `0.0`.
fn scalar(row: &RawRow, field: &str) -> f64 {
    let Some(raw) = row.get(field).map(str::trim).filter(|raw| !raw.is_empty()) else {
        return 0.0;
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!(
                "line {}: non-numeric {field} value {raw:?} defaulted to 0.0",
                row.line()
            );
            0.0
        }
    }
}

fn text(row: &RawRow, field: &str) -> Option<String> {
    row.get(field)
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(str::to_owned)
}

/// Decode one collection column, treating malformed literals as empty.
fn collection(row: &RawRow, field: &str) -> Vec<Literal> {
    let raw = row.get(field).unwrap_or_default();
    parse_collection(raw).unwrap_or_else(|err| {
        debug!(
            "line {}: malformed {field} literal treated as empty: {err}",
            row.line()
        );
        Vec::new()
    })
}

fn entries<E: CollectionEntry>(row: &RawRow) -> Vec<E> {
    let columns: Vec<Vec<Literal>> = E::column_names()
        .map(|name| collection(row, &name))
        .collect();
    if !columns_aligned(&columns) {
        debug!(
            "line {}: {} columns have differing lengths",
            row.line(),
            E::PREFIX
        );
    }
    zip_entries(&columns)
}

fn coral(row: &RawRow) -> CoralCover {
    let extra = row
        .fields_with_prefix(CORAL_PREFIX)
        .filter(|(name, _)| *name != CORAL_COVER_FIELD)
        .filter_map(|(name, raw)| {
            let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
            Some((name.to_owned(), value))
        })
        .collect();
    CoralCover {
        cover_pct: scalar(row, CORAL_COVER_FIELD),
        extra,
    }
}

fn currents(row: &RawRow) -> Currents {
    Currents {
        u: scalar(row, "current_u"),
        v: scalar(row, "current_v"),
        speed: scalar(row, "current_speed"),
        stability: text(row, "current_stability"),
        flow_direction: text(row, "current_flow_direction"),
    }
}
