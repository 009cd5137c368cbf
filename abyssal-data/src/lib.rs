//! Dataset access and row parsing for the Abyssal engine.
//!
//! Responsibilities:
//! - Read the merged seafloor table into an owned [`Dataset`].
//! - Turn each [`RawRow`] into a typed `CellRecord` with [`parse_cell`].
//! - Provide capability-scoped file helpers in [`fs`].
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `abyssal-scorer`).
//! - Never evaluate cell text; collection literals are decoded only.
//!
//! Invariants:
//! - Only a bad `row`/`col` identity fails a row. Every other field
//!   recovers to a neutral default.
//! - No global mutable state. Reloading is explicit and owned by the
//!   caller.

#![forbid(unsafe_code)]

mod dataset;
pub mod fs;
mod parse;
mod row;

pub use dataset::{Dataset, DatasetError, DatasetOptions};
pub use parse::{COL_FIELD, IdentityError, ROW_FIELD, parse_cell};
pub use row::RawRow;
