//! Parsed grid cells.

use std::collections::BTreeMap;
use std::fmt;

use geo::Coord;

use crate::{FoodWebLink, Hazard, LifeForm, Resource, SurveyPoint};

/// Grid coordinates identifying a cell.
///
/// # Examples
/// ```
/// use abyssal_core::CellId;
///
/// let id = CellId::new(3, 7);
/// assert_eq!(id.to_string(), "(3,7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId {
    /// Grid row.
    pub row: u32,
    /// Grid column.
    pub col: u32,
}

impl CellId {
    /// Construct an identifier from row and column.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Coral survey figures joined from the coral table.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoralCover {
    /// Percentage of the seafloor covered by coral (`coral_coral_cover_pct`).
    pub cover_pct: f64,
    /// Any other numeric `coral_*` column, keyed by its full column name.
    pub extra: BTreeMap<String, f64>,
}

/// Water current measurements joined from the currents table.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Currents {
    /// Eastward velocity component.
    pub u: f64,
    /// Northward velocity component.
    pub v: f64,
    /// Current speed.
    pub speed: f64,
    /// Stability label such as `"low"` or `"high"`.
    pub stability: Option<String>,
    /// Flow direction label; frequently absent upstream.
    pub flow_direction: Option<String>,
}

/// A single seafloor grid cell with its scalar and collection attributes.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use abyssal_core::{CellId, CellRecord};
///
/// let cell = CellRecord::new(CellId::new(0, 1));
/// assert_eq!(cell.biome, "unknown");
/// assert!(cell.resources.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRecord {
    /// Grid identity.
    pub id: CellId,
    /// Geographic position.
    pub location: Coord<f64>,
    /// Water depth in metres.
    pub depth_m: f64,
    /// Ambient pressure in atmospheres.
    pub pressure_atm: f64,
    /// Water temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Free-form biome label.
    pub biome: String,
    /// Coral survey figures.
    pub coral: CoralCover,
    /// Current measurements.
    pub currents: Currents,
    /// Resource deposits.
    pub resources: Vec<Resource>,
    /// Known hazards.
    pub hazards: Vec<Hazard>,
    /// Observed life forms.
    pub life: Vec<LifeForm>,
    /// Survey points of interest.
    pub survey_points: Vec<SurveyPoint>,
    /// Food-web links for the cell's biome.
    pub food_web: Vec<FoodWebLink>,
}

/// Biome label used when the source row has none.
pub const UNKNOWN_BIOME: &str = "unknown";

impl CellRecord {
    /// Construct an empty cell at `id` with zeroed scalars.
    #[must_use]
    pub fn new(id: CellId) -> Self {
        Self {
            id,
            location: Coord { x: 0.0, y: 0.0 },
            depth_m: 0.0,
            pressure_atm: 0.0,
            temperature_c: 0.0,
            biome: UNKNOWN_BIOME.to_owned(),
            coral: CoralCover::default(),
            currents: Currents::default(),
            resources: Vec::new(),
            hazards: Vec::new(),
            life: Vec::new(),
            survey_points: Vec::new(),
            food_web: Vec::new(),
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.location.x
    }
}
