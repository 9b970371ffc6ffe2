//! Stems, branches and pillars
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 天干、地支皆以自 0 起算的序號表示，序號即其在 [`fmt::STEM_NAMES`]、
//! [`fmt::BRANCH_NAMES`] 中的位置。曆表資料所用的序號自 1 起算，轉換見
//! [`Stem::from_index`]、[`Branch::from_index`]。

use std::fmt::{self as stdfmt, Display};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

pub mod fmt;

/// 五行
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// 依「木火土金水」次序列出五行。
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// 五行的漢字名。
    pub fn name(&self) -> &'static str {
        use Element::*;
        match self {
            Wood => "木",
            Fire => "火",
            Earth => "土",
            Metal => "金",
            Water => "水",
        }
    }
}

/// 陰陽
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

/// 天干，序號 `0..10` 分別為「甲」到「癸」。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Stem(u8);

impl Stem {
    pub const COUNT: u8 = 10;

    /// 以自 0 起算的序號建立天干，超出 `0..10` 則返回 `None`。
    pub fn new(ordinal: u8) -> Option<Self> {
        (ordinal < Self::COUNT).then_some(Self(ordinal))
    }
    /// 以曆表資料中自 1 起算的序號建立天干。
    ///
    /// `field` 為資料欄名，僅用於錯誤信息。序號不在 `1..=10` 間則回報
    /// [`Error::InvalidIndex`]，不作任何替代。
    ///
    /// # 用例
    ///
    /// ```
    /// use bazi::ganzhi::Stem;
    ///
    /// assert_eq!("甲", Stem::from_index("HYear", 1).unwrap().name());
    /// assert!(Stem::from_index("HYear", 0).is_err());
    /// ```
    pub fn from_index(field: &'static str, index: i32) -> Result<Self> {
        u8::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(Self::new)
            .ok_or(Error::InvalidIndex {
                field,
                value: index,
                max: Self::COUNT.into(),
            })
    }
    /// 序號，`0..10`
    pub fn ordinal(&self) -> u8 {
        self.0
    }
    pub fn name(&self) -> &'static str {
        fmt::STEM_NAMES[self.0 as usize]
    }
    /// 天干五行：甲乙木、丙丁火、戊己土、庚辛金、壬癸水。
    pub fn element(&self) -> Element {
        Element::ALL[(self.0 / 2) as usize]
    }
    /// 序號為偶數者陽，奇數者陰。
    pub fn polarity(&self) -> Polarity {
        if self.0 % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
    /// 順數 `n` 位後的天干。
    pub fn offset(&self, n: u8) -> Self {
        Self(((self.0 as u32 + n as u32) % Self::COUNT as u32) as u8)
    }
}

/// 地支，序號 `0..12` 分別為「子」到「亥」。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Branch(u8);

impl Branch {
    pub const COUNT: u8 = 12;

    pub const ZI: Branch = Branch(0);
    pub const CHOU: Branch = Branch(1);
    pub const YIN: Branch = Branch(2);
    pub const MAO: Branch = Branch(3);
    pub const CHEN: Branch = Branch(4);
    pub const SI: Branch = Branch(5);
    pub const WU: Branch = Branch(6);
    pub const WEI: Branch = Branch(7);
    pub const SHEN: Branch = Branch(8);
    pub const YOU: Branch = Branch(9);
    pub const XU: Branch = Branch(10);
    pub const HAI: Branch = Branch(11);

    /// 以自 0 起算的序號建立地支，超出 `0..12` 則返回 `None`。
    pub fn new(ordinal: u8) -> Option<Self> {
        (ordinal < Self::COUNT).then_some(Self(ordinal))
    }
    /// 以曆表資料中自 1 起算的序號建立地支，序號不在 `1..=12` 間則回報
    /// [`Error::InvalidIndex`]。
    pub fn from_index(field: &'static str, index: i32) -> Result<Self> {
        u8::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(Self::new)
            .ok_or(Error::InvalidIndex {
                field,
                value: index,
                max: Self::COUNT.into(),
            })
    }
    /// 序號，`0..12`
    pub fn ordinal(&self) -> u8 {
        self.0
    }
    pub fn name(&self) -> &'static str {
        fmt::BRANCH_NAMES[self.0 as usize]
    }
    /// 生肖
    pub fn animal(&self) -> &'static str {
        fmt::ANIMAL_NAMES[self.0 as usize]
    }
    /// 地支五行：寅卯木、巳午火、申酉金、亥子水，辰戌丑未土。
    pub fn element(&self) -> Element {
        use Element::*;
        const ELEMENTS: [Element; 12] = [
            Water, Earth, Wood, Wood, Earth, Fire, Fire, Earth, Metal, Metal, Earth, Water,
        ];
        ELEMENTS[self.0 as usize]
    }
    /// 順數 `n` 位後的地支。
    ///
    /// ```
    /// use bazi::ganzhi::Branch;
    ///
    /// assert_eq!(Branch::CHOU, Branch::HAI.offset(2));
    /// ```
    pub fn offset(&self, n: u8) -> Self {
        Self(((self.0 as u32 + n as u32) % Self::COUNT as u32) as u8)
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// 柱，一干一支。
///
/// 序列化為 `{chinese, element, animal, branch: {element}}`，其中 `element`
/// 為天干五行。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(into = "PillarRecord")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
    /// 干支名，如「甲子」。
    pub fn label(&self) -> String {
        self.stem.name().to_owned() + self.branch.name()
    }
    /// 天干五行
    pub fn element(&self) -> Element {
        self.stem.element()
    }
    /// 地支生肖
    pub fn animal(&self) -> &'static str {
        self.branch.animal()
    }
    /// 地支五行
    pub fn branch_element(&self) -> Element {
        self.branch.element()
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// 解析「甲子」形式的干支名，須恰為一干一支。
///
/// ```
/// use bazi::ganzhi::Pillar;
///
/// let pillar: Pillar = "庚午".parse().unwrap();
/// assert_eq!("Horse", pillar.animal());
/// assert!("庚".parse::<Pillar>().is_err());
/// ```
impl FromStr for Pillar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPillar {
            label: s.to_owned(),
        };
        let mut chars = s.chars();
        let (Some(stem), Some(branch), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let position = |names: &[&str], ch: char| {
            names
                .iter()
                .position(|name| name.chars().eq([ch]))
                .map(|i| i as u8)
        };
        let stem = position(fmt::STEM_NAMES.as_slice(), stem).and_then(Stem::new);
        let branch = position(fmt::BRANCH_NAMES.as_slice(), branch).and_then(Branch::new);
        match (stem, branch) {
            (Some(stem), Some(branch)) => Ok(Pillar::new(stem, branch)),
            _ => Err(invalid()),
        }
    }
}

#[derive(Serialize)]
struct PillarRecord {
    chinese: String,
    element: Element,
    animal: &'static str,
    branch: BranchRecord,
}

#[derive(Serialize)]
struct BranchRecord {
    element: Element,
}

impl From<Pillar> for PillarRecord {
    fn from(pillar: Pillar) -> Self {
        PillarRecord {
            chinese: pillar.label(),
            element: pillar.element(),
            animal: pillar.animal(),
            branch: BranchRecord {
                element: pillar.branch_element(),
            },
        }
    }
}

/// 四柱：年、月、日、時。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Pillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub time: Pillar,
}

impl Pillars {
    /// 依年、月、日、時次序逐柱迭代。
    pub fn iter(&self) -> impl Iterator<Item = &Pillar> {
        [&self.year, &self.month, &self.day, &self.time].into_iter()
    }
}

/// 輸出「甲子年丙寅月戊辰日壬子時」形式，見 [`fmt::chart`]。
impl Display for Pillars {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        f.write_str(&fmt::chart(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_elements() {
        use Element::*;
        let stds = [
            Wood, Wood, Fire, Fire, Earth, Earth, Metal, Metal, Water, Water,
        ];
        for (ordinal, std) in (0..10).zip(stds) {
            assert_eq!(std, Stem::new(ordinal).unwrap().element());
        }
    }

    #[test]
    fn stem_polarity() {
        for (std, name) in [(Polarity::Yang, "甲"), (Polarity::Yin, "乙"), (Polarity::Yang, "壬")] {
            let stem = (0..10)
                .filter_map(Stem::new)
                .find(|s| s.name() == name)
                .unwrap();
            assert_eq!(std, stem.polarity());
        }
    }

    #[test]
    fn index_bounds() {
        assert_eq!(Ok(Stem(9)), Stem::from_index("HDay", 10));
        assert_eq!(Ok(Branch(11)), Branch::from_index("EDay", 12));
        for bad in [0, -1, 11, 300] {
            assert_eq!(
                Err(Error::InvalidIndex {
                    field: "HDay",
                    value: bad,
                    max: 10
                }),
                Stem::from_index("HDay", bad)
            );
        }
        for bad in [0, -3, 13] {
            assert!(Branch::from_index("EYear", bad).is_err());
        }
    }

    #[test]
    fn branch_attributes() {
        for (std, branch) in [
            (("子", "Rat", Element::Water), Branch::ZI),
            (("辰", "Dragon", Element::Earth), Branch::CHEN),
            (("午", "Horse", Element::Fire), Branch::WU),
            (("酉", "Rooster", Element::Metal), Branch::YOU),
            (("亥", "Pig", Element::Water), Branch::HAI),
        ] {
            assert_eq!(std, (branch.name(), branch.animal(), branch.element()));
        }
    }

    #[test]
    fn parse_pillar() {
        let pillar: Pillar = "甲子".parse().unwrap();
        assert_eq!(Pillar::new(Stem(0), Branch::ZI), pillar);
        assert_eq!("甲子", pillar.to_string());
        for bad in ["", "甲", "子甲", "甲子年", "ab"] {
            assert_eq!(
                Err(Error::InvalidPillar {
                    label: bad.to_owned()
                }),
                bad.parse::<Pillar>()
            );
        }
    }

    #[test]
    fn pillar_json() {
        let pillar: Pillar = "丙寅".parse().unwrap();
        let json = serde_json::to_value(pillar).unwrap();
        assert_eq!(
            serde_json::json!({
                "chinese": "丙寅",
                "element": "FIRE",
                "animal": "Tiger",
                "branch": { "element": "WOOD" },
            }),
            json
        );
    }
}
