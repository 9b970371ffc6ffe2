//! The entry point tying pillars and analysis together.

use serde::Serialize;
use tracing::instrument;

use crate::analysis::{self, BasicAnalysis, Gender};
use crate::error::Result;
use crate::ganzhi::{Pillar, Pillars};
use crate::mapping::MappingSource;
use crate::pillar::PillarCalculator;

/// Pillars and analysis of one birth.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteAnalysis {
    pub main_pillars: Pillars,
    pub basic_analysis: BasicAnalysis,
}

/// Computes the chart of one birth against a [`MappingSource`].
///
/// Nothing is cached: every call queries the source again.
///
/// # Example
///
/// ```
/// use bazi::{BaziCalculator, Gender, MappingRecord, MappingSource, Result};
///
/// struct AllOnes;
///
/// impl MappingSource for AllOnes {
///     fn mapping(&self, _: i32, _: u32, _: u32) -> Result<MappingRecord> {
///         Ok(MappingRecord {
///             year_stem: 1,
///             year_branch: 1,
///             month_stem: 1,
///             month_branch: 1,
///             day_stem: 1,
///             day_branch: 1,
///         })
///     }
/// }
///
/// let calc = BaziCalculator::new(1990, 1, 1, 12, Gender::Male, AllOnes);
/// assert_eq!("甲子年甲子月甲子日庚午時", calc.chart().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct BaziCalculator<S> {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    gender: Gender,
    pillars: PillarCalculator<S>,
}

impl<S: MappingSource> BaziCalculator<S> {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, gender: Gender, source: S) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            gender,
            pillars: PillarCalculator::new(source),
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn source(&self) -> &S {
        self.pillars.source()
    }

    #[instrument(level = "debug", skip(self), fields(year = self.year, month = self.month, day = self.day, hour = self.hour))]
    pub fn calculate_pillars(&self) -> Result<Pillars> {
        self.pillars
            .pillars(self.year, self.month, self.day, self.hour)
    }

    /// The hour pillar alone.
    pub fn calculate_hour_pillar(&self) -> Result<Pillar> {
        self.pillars
            .hour_pillar(self.year, self.month, self.day, self.hour)
    }

    #[instrument(level = "debug", skip(self), fields(year = self.year, gender = ?self.gender))]
    pub fn calculate_basic_analysis(&self) -> Result<BasicAnalysis> {
        let pillars = self.calculate_pillars()?;
        Ok(analysis::analyze(&pillars, self.year, self.gender))
    }

    pub fn complete_analysis(&self) -> Result<CompleteAnalysis> {
        Ok(CompleteAnalysis {
            main_pillars: self.calculate_pillars()?,
            basic_analysis: self.calculate_basic_analysis()?,
        })
    }

    /// Renders the chart as `{year}年{month}月{day}日{time}時`.
    pub fn chart(&self) -> Result<String> {
        Ok(self.calculate_pillars()?.to_string())
    }
}
