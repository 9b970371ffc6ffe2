//! 干支、生肖等文本形式

use super::Pillars;

/// 十天干，第 0 項為「甲」。
pub const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 十二地支，第 0 項為「子」。
pub const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 十二生肖，與 [`BRANCH_NAMES`] 逐項對應。
pub const ANIMAL_NAMES: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// 四柱後所綴的字，依次為年、月、日、時。
pub const PILLAR_SUFFIXES: [&str; 4] = ["年", "月", "日", "時"];

/// 干支序號轉為文本形式，`1..=60` 分別為「甲子」到「癸亥」，與
/// [`crate::Date::sexagenary`] 的編號一致。
///
/// # 用例
///
/// ```
/// use bazi::ganzhi;
///
/// assert_eq!("甲子", ganzhi::fmt::sexagenary(1));
/// assert_eq!("乙巳", ganzhi::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    let num = num % 60 + 59;
    STEM_NAMES[(num % 10) as usize].to_owned() + BRANCH_NAMES[(num % 12) as usize]
}

/// 取得四柱的文本形式，如「甲子年丙寅月戊辰日壬子時」。
pub fn chart(pillars: &Pillars) -> String {
    pillars
        .iter()
        .zip(PILLAR_SUFFIXES)
        .map(|(pillar, suffix)| pillar.label() + suffix)
        .collect()
}
