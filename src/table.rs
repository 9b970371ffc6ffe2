//! In-memory mapping table loaded from JSON.
//!
//! The JSON layout nests records by year, month and day:
//!
//! ```json
//! { "1990": { "1": { "1": { "HYear": 6, "EYear": 6, "HMonth": 3, "EMonth": 1, "HDay": 3, "EDay": 3 } } } }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::date::Date;
use crate::error::{Error, Result};
use crate::mapping::{MappingRecord, MappingSource};

type Nested = BTreeMap<i32, BTreeMap<u32, BTreeMap<u32, MappingRecord>>>;

/// A fully loaded [`MappingSource`].
///
/// # Example
///
/// ```
/// use bazi::MappingSource;
/// use bazi::table::MappingTable;
///
/// let table = MappingTable::from_json_str(
///     r#"{"2000": {"1": {"1": {"HYear": 6, "EYear": 4, "HMonth": 3, "EMonth": 1, "HDay": 5, "EDay": 7}}}}"#,
/// )
/// .unwrap();
/// assert_eq!(5, table.mapping(2000, 1, 1).unwrap().day_stem);
/// assert!(table.mapping(2000, 1, 2).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingTable {
    records: BTreeMap<Date, MappingRecord>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let nested: Nested = serde_json::from_str(json).map_err(|e| Error::MappingLoad {
            origin: "<string>".to_owned(),
            reason: e.to_string(),
        })?;
        Self::from_nested(nested, "<string>")
    }

    /// Parses a table from a reader yielding JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let nested: Nested =
            serde_json::from_reader(BufReader::new(reader)).map_err(|e| Error::MappingLoad {
                origin: "<reader>".to_owned(),
                reason: e.to_string(),
            })?;
        Self::from_nested(nested, "<reader>")
    }

    /// Loads a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let load_err = |reason: String| Error::MappingLoad {
            origin: origin.clone(),
            reason,
        };
        let file = File::open(path).map_err(|e| load_err(e.to_string()))?;
        let nested: Nested = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| load_err(e.to_string()))?;
        let table = Self::from_nested(nested, &origin)?;
        info!(path = %origin, records = table.len(), "loaded date mappings");
        Ok(table)
    }

    fn from_nested(nested: Nested, origin: &str) -> Result<Self> {
        let mut table = Self::new();
        for (year, months) in nested {
            for (month, days) in months {
                for (day, record) in days {
                    table
                        .insert(year, month, day, record)
                        .map_err(|e| Error::MappingLoad {
                            origin: origin.to_owned(),
                            reason: e.to_string(),
                        })?;
                }
            }
        }
        debug!(origin, records = table.len(), "parsed date mappings");
        Ok(table)
    }

    /// Adds or replaces the record of a date, returning the previous one.
    ///
    /// Fails with [`Error::InvalidDate`] if the date does not exist.
    pub fn insert(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        record: MappingRecord,
    ) -> Result<Option<MappingRecord>> {
        let date =
            Date::from_gregorian(year, month, day).ok_or(Error::InvalidDate { year, month, day })?;
        Ok(self.records.insert(date, record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in date order.
    pub fn records(&self) -> impl Iterator<Item = (Date, &MappingRecord)> {
        self.records.iter().map(|(date, record)| (*date, record))
    }
}

impl MappingSource for MappingTable {
    fn mapping(&self, year: i32, month: u32, day: u32) -> Result<MappingRecord> {
        Date::from_gregorian(year, month, day)
            .and_then(|date| self.records.get(&date))
            .copied()
            .ok_or(Error::MappingNotFound { year, month, day })
    }
}
