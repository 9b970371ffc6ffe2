//! Four pillars (八字) charts from calendar mapping data.
//!
//! The crate does not compute the Chinese calendar itself. It consumes a
//! [`MappingSource`] resolving a Gregorian date into the stem and branch
//! indices of its year, month and day, derives the hour pillar, and reads the
//! traditional associations off the resulting chart.
//!
//! # Examples
//!
//! With a mapping table loaded from JSON:
//!
//! ```
//! use bazi::{BaziCalculator, Gender, table::MappingTable};
//!
//! let table = MappingTable::from_json_str(
//!     r#"{"1984": {"2": {"5": {"HYear": 1, "EYear": 1, "HMonth": 3, "EMonth": 3, "HDay": 6, "EDay": 6}}}}"#,
//! )
//! .unwrap();
//! let calc = BaziCalculator::new(1984, 2, 5, 13, Gender::Female, &table);
//!
//! assert_eq!("甲子年丙寅月己巳日辛未時", calc.chart().unwrap());
//!
//! let analysis = calc.calculate_basic_analysis().unwrap();
//! assert_eq!(6, analysis.life_number);
//! assert_eq!(8, analysis.five_factors.total());
//! ```
//!
//! Any type can serve as the source, as long as it implements
//! [`MappingSource`]:
//!
//! ```
//! use bazi::{MappingRecord, MappingSource, Result};
//! use bazi::pillar::PillarCalculator;
//!
//! struct Fixed(MappingRecord);
//!
//! impl MappingSource for Fixed {
//!     fn mapping(&self, _: i32, _: u32, _: u32) -> Result<MappingRecord> {
//!         Ok(self.0)
//!     }
//! }
//!
//! let record = MappingRecord {
//!     year_stem: 7, year_branch: 7, month_stem: 5, month_branch: 3,
//!     day_stem: 1, day_branch: 1,
//! };
//! let pillars = PillarCalculator::new(Fixed(record)).pillars(1990, 3, 1, 0).unwrap();
//! assert_eq!("庚午", pillars.year.label());
//! assert_eq!("甲子", pillars.time.label());
//! ```

pub mod analysis;
pub mod calculator;
pub mod date;
pub mod error;
pub mod ganzhi;
pub mod mapping;
pub mod pillar;
pub mod table;

pub use analysis::{BasicAnalysis, Gender};
pub use calculator::{BaziCalculator, CompleteAnalysis};
pub use date::Date;
pub use error::{Error, Result};
pub use ganzhi::{Pillar, Pillars};
pub use mapping::{MappingRecord, MappingSource};
