//! Core domain types for the Abyssal grid scoring engine.
//!
//! A [`CellRecord`] is the typed form of one row of the merged seafloor
//! table. Multi-valued features arrive as bracketed literal text spread over
//! several columns; [`parse_collection`] decodes one column and
//! [`zip_entries`] joins a family of columns into structured entries such as
//! [`Resource`] and [`Hazard`]. Decoding never evaluates input.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cell;
mod entry;
mod hazard;
mod life;
mod literal;
mod resource;
mod survey;

pub use cell::{CellId, CellRecord, CoralCover, Currents, UNKNOWN_BIOME};
pub use entry::{CollectionEntry, EntrySlots, columns_aligned, zip_entries};
pub use hazard::{Hazard, Severity};
pub use life::LifeForm;
pub use literal::{Literal, LiteralError, MAX_NESTING, decode_literal, parse_collection};
pub use resource::Resource;
pub use survey::{FoodWebLink, SurveyPoint};
