//! Attributes derived from a chart: life number, day master, the traditional
//! associations of the day pillar, the five-element tally and the eight
//! mansions.
//!
//! Everything here is a pure function of the pillars, the birth year and the
//! gender. Lookups into the association tables never fail; a gap comes back
//! as an empty value.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::ganzhi::{Branch, Element, Pillars, Polarity, Stem};

mod tables;

/// Gender of the subject. Only the life number depends on it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("unknown gender {s:?} (expected male or female)")),
        }
    }
}

/// Compass octant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// East or West group of the eight mansions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Group {
    East,
    West,
}

/// The day pillar's stem read as the subject's core identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct DayMaster {
    pub stem: Stem,
    #[serde(rename = "nature")]
    pub polarity: Polarity,
    pub element: Element,
}

/// Element counts over the four stems and four branches of a chart.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct FiveFactors {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl FiveFactors {
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn add(&mut self, element: Element) {
        *match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        } += 1;
    }

    pub fn total(&self) -> u32 {
        Element::ALL.iter().map(|&e| self.get(e)).sum()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct LuckyDirections {
    pub wealth: Direction,
    pub health: Direction,
    pub romance: Direction,
    pub career: Direction,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnluckyDirections {
    pub obstacles: Direction,
    pub quarrels: Direction,
    pub setbacks: Direction,
    pub total_loss: Direction,
}

/// Eight mansions classification of a life number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct EightMansions {
    pub group: Group,
    pub lucky: LuckyDirections,
    pub unlucky: UnluckyDirections,
}

impl EightMansions {
    /// Looks up the directions of a life number.
    ///
    /// Numbers outside `1..=9` use the directions of 1. The group only
    /// depends on parity: odd is East, even is West.
    pub fn for_life_number(life_number: u8) -> Self {
        let tables::GuaDirections { lucky, unlucky } = tables::gua_directions(life_number);
        let [wealth, health, romance, career] = lucky;
        let [obstacles, quarrels, setbacks, total_loss] = unlucky;
        EightMansions {
            group: if life_number % 2 == 0 {
                Group::West
            } else {
                Group::East
            },
            lucky: LuckyDirections {
                wealth,
                health,
                romance,
                career,
            },
            unlucky: UnluckyDirections {
                obstacles,
                quarrels,
                setbacks,
                total_loss,
            },
        }
    }
}

/// All attributes derived from a chart.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicAnalysis {
    #[serde(rename = "lifeGua")]
    pub life_number: u8,
    pub day_master: DayMaster,
    pub nobleman: Vec<Branch>,
    #[serde(serialize_with = "symbol_or_empty")]
    pub intelligence: Option<Branch>,
    #[serde(serialize_with = "symbol_or_empty")]
    pub sky_horse: Option<Branch>,
    #[serde(serialize_with = "symbol_or_empty")]
    pub peach_blossom: Option<Branch>,
    pub five_factors: FiveFactors,
    pub eight_mansions: EightMansions,
}

fn symbol_or_empty<S: Serializer>(branch: &Option<Branch>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(branch.map_or("", |b| b.name()))
}

/// Life number (命卦) of a birth year.
///
/// The base runs through a 9-year cycle anchored at 1900; women get the
/// mirrored value `10 - base`. The result is always in `1..=9`.
///
/// ```
/// use bazi::analysis::{life_number, Gender};
///
/// assert_eq!(4, life_number(1984, Gender::Male));
/// assert_eq!(6, life_number(1984, Gender::Female));
/// ```
pub fn life_number(birth_year: i32, gender: Gender) -> u8 {
    let base = ((birth_year as i64 - 1900).rem_euclid(9) + 1) as u8;
    match gender {
        Gender::Male => base,
        Gender::Female => 10 - base,
    }
}

pub fn day_master(pillars: &Pillars) -> DayMaster {
    let stem = pillars.day.stem;
    DayMaster {
        stem,
        polarity: stem.polarity(),
        element: stem.element(),
    }
}

/// Nobleman branches of an element; empty if the table has no entry.
pub fn nobleman(element: Element) -> Vec<Branch> {
    tables::NOBLEMAN
        .get(&element)
        .map(|branches| branches.to_vec())
        .unwrap_or_default()
}

pub fn intelligence(element: Element) -> Option<Branch> {
    tables::INTELLIGENCE.get(&element).copied()
}

pub fn peach_blossom(element: Element) -> Option<Branch> {
    tables::PEACH_BLOSSOM.get(&element).copied()
}

pub fn sky_horse(day_branch: Branch) -> Option<Branch> {
    tables::SKY_HORSE.get(&day_branch).copied()
}

/// Counts the stem element and the branch element of every pillar.
pub fn five_factors(pillars: &Pillars) -> FiveFactors {
    let mut factors = FiveFactors::default();
    for pillar in pillars.iter() {
        factors.add(pillar.element());
        factors.add(pillar.branch_element());
    }
    factors
}

/// Derives the full [`BasicAnalysis`] of a chart.
pub fn analyze(pillars: &Pillars, birth_year: i32, gender: Gender) -> BasicAnalysis {
    let life_number = life_number(birth_year, gender);
    let day_master = day_master(pillars);
    BasicAnalysis {
        life_number,
        day_master,
        nobleman: nobleman(day_master.element),
        intelligence: intelligence(day_master.element),
        sky_horse: sky_horse(pillars.day.branch),
        peach_blossom: peach_blossom(day_master.element),
        five_factors: five_factors(pillars),
        eight_mansions: EightMansions::for_life_number(life_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::Pillar;

    fn pillars(labels: [&str; 4]) -> Pillars {
        let [year, month, day, time] = labels.map(|l| l.parse::<Pillar>().unwrap());
        Pillars {
            year,
            month,
            day,
            time,
        }
    }

    #[test]
    fn life_numbers() {
        for (year, male, female) in [
            (1900, 1, 9),
            (1984, 4, 6),
            (1990, 1, 9),
            (1995, 6, 4),
            (2000, 2, 8),
            (1899, 9, 1),
            (1850, 5, 5),
        ] {
            assert_eq!(male, life_number(year, Gender::Male), "{year} male");
            assert_eq!(female, life_number(year, Gender::Female), "{year} female");
        }
    }

    #[test]
    fn day_master_polarity() {
        let chart = pillars(["甲子", "丙寅", "辛酉", "戊子"]);
        let dm = day_master(&chart);
        assert_eq!("辛", dm.stem.name());
        assert_eq!(Polarity::Yin, dm.polarity);
        assert_eq!(Element::Metal, dm.element);

        let chart = pillars(["甲子", "丙寅", "壬午", "庚子"]);
        assert_eq!(Polarity::Yang, day_master(&chart).polarity);
    }

    #[test]
    fn associations() {
        assert_eq!(vec![Branch::CHOU, Branch::WEI], nobleman(Element::Wood));
        assert_eq!(Some(Branch::HAI), intelligence(Element::Metal));
        assert_eq!(Some(Branch::YOU), peach_blossom(Element::Water));
        for (day_branch, std) in [
            (Branch::ZI, Branch::CHEN),
            (Branch::SHEN, Branch::ZI),
            (Branch::HAI, Branch::MAO),
        ] {
            assert_eq!(Some(std), sky_horse(day_branch));
        }
    }

    #[test]
    fn tally() {
        let chart = pillars(["甲子", "丙寅", "戊辰", "庚申"]);
        let factors = five_factors(&chart);
        assert_eq!(
            FiveFactors {
                wood: 2,
                fire: 1,
                earth: 2,
                metal: 2,
                water: 1,
            },
            factors
        );
        assert_eq!(8, factors.total());
    }

    #[test]
    fn eight_mansions() {
        let m = EightMansions::for_life_number(1);
        assert_eq!(Group::East, m.group);
        assert_eq!(Direction::SE, m.lucky.wealth);
        assert_eq!(Direction::SW, m.unlucky.total_loss);

        let m = EightMansions::for_life_number(6);
        assert_eq!(Group::West, m.group);
        assert_eq!(Direction::NW, m.lucky.career);

        for out_of_range in [0, 10, 200] {
            let m = EightMansions::for_life_number(out_of_range);
            assert_eq!(EightMansions::for_life_number(1).lucky, m.lucky);
            assert_eq!(EightMansions::for_life_number(1).unlucky, m.unlucky);
        }
    }

    #[test]
    fn analysis_json() {
        let chart = pillars(["甲子", "甲子", "甲子", "甲子"]);
        let json = serde_json::to_value(analyze(&chart, 1990, Gender::Male)).unwrap();
        assert_eq!(1, json["lifeGua"]);
        assert_eq!("甲", json["dayMaster"]["stem"]);
        assert_eq!("Yang", json["dayMaster"]["nature"]);
        assert_eq!("WOOD", json["dayMaster"]["element"]);
        assert_eq!(serde_json::json!(["丑", "未"]), json["nobleman"]);
        assert_eq!("辰", json["skyHorse"]);
        assert_eq!(4, json["fiveFactors"]["WOOD"]);
        assert_eq!(4, json["fiveFactors"]["WATER"]);
        assert_eq!("East", json["eightMansions"]["group"]);
        assert_eq!("SW", json["eightMansions"]["unlucky"]["totalLoss"]);
    }
}
