//! The calendar mapping boundary.
//!
//! A [`MappingSource`] resolves a Gregorian date into the stem and branch
//! indices of its year, month and day pillars. How the data is produced or
//! stored is up to the implementor; [`crate::table::MappingTable`] is the
//! in-memory adapter shipped with this crate.

use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Stem and branch indices of the year, month and day pillars of one date.
///
/// All indices are 1-based: stems in `1..=10`, branches in `1..=12`. Field
/// names on the wire follow the mapping data (`HYear`, `EYear`, ...).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MappingRecord {
    #[serde(rename = "HYear")]
    pub year_stem: i32,
    #[serde(rename = "EYear")]
    pub year_branch: i32,
    #[serde(rename = "HMonth")]
    pub month_stem: i32,
    #[serde(rename = "EMonth")]
    pub month_branch: i32,
    #[serde(rename = "HDay")]
    pub day_stem: i32,
    #[serde(rename = "EDay")]
    pub day_branch: i32,
}

/// Resolves a date to its [`MappingRecord`].
///
/// Implementations fail with [`crate::Error::MappingNotFound`] when they
/// have no record for the date. Lookups take `&self`; a source is expected to
/// be fully loaded before it is queried.
pub trait MappingSource {
    fn mapping(&self, year: i32, month: u32, day: u32) -> Result<MappingRecord>;
}

impl<T: MappingSource + ?Sized> MappingSource for &T {
    fn mapping(&self, year: i32, month: u32, day: u32) -> Result<MappingRecord> {
        (**self).mapping(year, month, day)
    }
}

impl<T: MappingSource + ?Sized> MappingSource for Box<T> {
    fn mapping(&self, year: i32, month: u32, day: u32) -> Result<MappingRecord> {
        (**self).mapping(year, month, day)
    }
}

impl<T: MappingSource + ?Sized> MappingSource for Rc<T> {
    fn mapping(&self, year: i32, month: u32, day: u32) -> Result<MappingRecord> {
        (**self).mapping(year, month, day)
    }
}

impl<T: MappingSource + ?Sized> MappingSource for Arc<T> {
    fn mapping(&self, year: i32, month: u32, day: u32) -> Result<MappingRecord> {
        (**self).mapping(year, month, day)
    }
}
