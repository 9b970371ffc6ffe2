//! Derivation of the four pillars from mapping data and the hour of birth.

use tracing::debug;

use crate::error::Result;
use crate::ganzhi::{Branch, Pillar, Pillars, Stem};
use crate::mapping::{MappingRecord, MappingSource};

/// Returns the branch of the two-hour window containing `hour`.
///
/// Branch `i` owns the hours `[23 + 2i, 25 + 2i)` modulo 24, so 23:00 and
/// 00:00 both fall into 子. Hours outside `0..=23` fall back to 子.
///
/// ```
/// use bazi::ganzhi::Branch;
/// use bazi::pillar::hour_branch;
///
/// assert_eq!(Branch::ZI, hour_branch(23));
/// assert_eq!(Branch::WU, hour_branch(12));
/// ```
pub fn hour_branch(hour: u32) -> Branch {
    if hour > 23 {
        return Branch::ZI;
    }
    Branch::ZI.offset((((hour + 1) / 2) % 12) as u8)
}

/// Returns the stem of an hour pillar, following the five rats rule: the 子
/// hour of a 甲 or 己 day is 甲子, of a 乙 or 庚 day 丙子, and so on.
pub fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    // (day * 2 + branch) mod 10
    day_stem.offset(day_stem.ordinal() + hour_branch.ordinal())
}

/// Resolves the year, month and day pillars of a mapping record.
///
/// Any index outside its cycle is an error; nothing is substituted.
pub fn resolve(record: &MappingRecord) -> Result<[Pillar; 3]> {
    let pillar = |stem: (&'static str, i32), branch: (&'static str, i32)| -> Result<Pillar> {
        Ok(Pillar::new(
            Stem::from_index(stem.0, stem.1)?,
            Branch::from_index(branch.0, branch.1)?,
        ))
    };
    Ok([
        pillar(("HYear", record.year_stem), ("EYear", record.year_branch))?,
        pillar(("HMonth", record.month_stem), ("EMonth", record.month_branch))?,
        pillar(("HDay", record.day_stem), ("EDay", record.day_branch))?,
    ])
}

/// Derives pillars from a [`MappingSource`].
#[derive(Debug, Clone)]
pub struct PillarCalculator<S> {
    source: S,
}

impl<S: MappingSource> PillarCalculator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Derives the four pillars for a birth date and hour.
    ///
    /// Fails if the source has no record for the date, or if the record
    /// holds an index outside its cycle.
    pub fn pillars(&self, year: i32, month: u32, day: u32, hour: u32) -> Result<Pillars> {
        let record = self.source.mapping(year, month, day)?;
        let [year_pillar, month_pillar, day_pillar] = resolve(&record)?;
        let pillars = Pillars {
            year: year_pillar,
            month: month_pillar,
            day: day_pillar,
            time: time_pillar(day_pillar.stem, hour),
        };
        debug!(year, month, day, hour, %pillars, "derived pillars");
        Ok(pillars)
    }

    /// Derives only the hour pillar, which still requires the day stem from
    /// the mapping source.
    pub fn hour_pillar(&self, year: i32, month: u32, day: u32, hour: u32) -> Result<Pillar> {
        let record = self.source.mapping(year, month, day)?;
        let day_stem = Stem::from_index("HDay", record.day_stem)?;
        Ok(time_pillar(day_stem, hour))
    }
}

fn time_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = hour_branch(hour);
    Pillar::new(hour_stem(day_stem, branch), branch)
}
