//! Association tables used by the analysis.
//!
//! The tables are plain data built once on first use. A missing key is a gap
//! in the tradition, not an error, so lookups return `Option`.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Direction::{self, *};
use crate::ganzhi::{Branch, Element};

/// 天乙貴人, keyed by the day master's element.
pub(crate) static NOBLEMAN: LazyLock<HashMap<Element, &'static [Branch]>> = LazyLock::new(|| {
    HashMap::from([
        (Element::Wood, &[Branch::CHOU, Branch::WEI] as &'static [Branch]),
        (Element::Fire, &[Branch::HAI, Branch::YOU] as &'static [Branch]),
        (Element::Earth, &[Branch::ZI, Branch::SHEN] as &'static [Branch]),
        (Element::Metal, &[Branch::YIN, Branch::WU] as &'static [Branch]),
        (Element::Water, &[Branch::MAO, Branch::SI] as &'static [Branch]),
    ])
});

/// 文昌, keyed by the day master's element.
pub(crate) static INTELLIGENCE: LazyLock<HashMap<Element, Branch>> = LazyLock::new(|| {
    HashMap::from([
        (Element::Wood, Branch::SI),
        (Element::Fire, Branch::SHEN),
        (Element::Earth, Branch::SHEN),
        (Element::Metal, Branch::HAI),
        (Element::Water, Branch::YIN),
    ])
});

/// 桃花, keyed by the day master's element.
pub(crate) static PEACH_BLOSSOM: LazyLock<HashMap<Element, Branch>> = LazyLock::new(|| {
    HashMap::from([
        (Element::Wood, Branch::ZI),
        (Element::Fire, Branch::MAO),
        (Element::Earth, Branch::MAO),
        (Element::Metal, Branch::WU),
        (Element::Water, Branch::YOU),
    ])
});

/// 驛馬, keyed by the day branch: each branch maps four places ahead.
pub(crate) static SKY_HORSE: LazyLock<HashMap<Branch, Branch>> = LazyLock::new(|| {
    (0..Branch::COUNT)
        .filter_map(Branch::new)
        .map(|branch| (branch, branch.offset(4)))
        .collect()
});

/// Lucky and unlucky directions of one life number.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct GuaDirections {
    /// 生氣, 天醫, 延年, 伏位
    pub lucky: [Direction; 4],
    /// 禍害, 五鬼, 六煞, 絕命
    pub unlucky: [Direction; 4],
}

const fn gua(lucky: [Direction; 4], unlucky: [Direction; 4]) -> GuaDirections {
    GuaDirections { lucky, unlucky }
}

/// Eight mansions directions of the life numbers 1 to 9.
///
/// Life number 5 has no trigram of its own and borrows the table of 2 (坤).
pub(crate) const GUA_DIRECTIONS: [GuaDirections; 9] = [
    gua([SE, E, S, N], [W, NE, NW, SW]),
    gua([NE, W, NW, SW], [E, SE, S, N]),
    gua([S, N, SE, E], [SW, NW, NE, W]),
    gua([N, S, E, SE], [NW, SW, W, NE]),
    gua([NE, W, NW, SW], [E, SE, S, N]),
    gua([W, NE, SW, NW], [SE, E, N, S]),
    gua([NW, SW, NE, W], [N, S, SE, E]),
    gua([SW, NW, W, NE], [S, N, E, SE]),
    gua([E, SE, N, S], [NE, W, SW, NW]),
];

/// Directions of a life number; numbers outside `1..=9` read as 1.
pub(crate) fn gua_directions(life_number: u8) -> GuaDirections {
    match life_number {
        1..=9 => GUA_DIRECTIONS[life_number as usize - 1],
        _ => GUA_DIRECTIONS[0],
    }
}
