use bazi::analysis::{self, Gender};
use bazi::ganzhi::{Branch, Stem};
use bazi::pillar::{PillarCalculator, hour_branch, hour_stem};
use bazi::{MappingRecord, MappingSource, Result};
use proptest::prelude::*;

struct Fixed(MappingRecord);

impl MappingSource for Fixed {
    fn mapping(&self, _: i32, _: u32, _: u32) -> Result<MappingRecord> {
        Ok(self.0)
    }
}

fn valid_record() -> impl Strategy<Value = MappingRecord> {
    (1..=10i32, 1..=12i32, 1..=10i32, 1..=12i32, 1..=10i32, 1..=12i32).prop_map(
        |(year_stem, year_branch, month_stem, month_branch, day_stem, day_branch)| MappingRecord {
            year_stem,
            year_branch,
            month_stem,
            month_branch,
            day_stem,
            day_branch,
        },
    )
}

proptest! {
    #[test]
    fn valid_records_resolve_in_bounds(record in valid_record(), hour in 0..24u32) {
        let pillars = PillarCalculator::new(Fixed(record)).pillars(2000, 1, 1, hour).unwrap();
        for pillar in pillars.iter() {
            prop_assert!(pillar.stem.ordinal() < 10);
            prop_assert!(pillar.branch.ordinal() < 12);
            prop_assert!(!pillar.animal().is_empty());
            prop_assert!(!pillar.element().name().is_empty());
            prop_assert!(!pillar.branch_element().name().is_empty());
        }
        prop_assert_eq!(record.day_stem - 1, pillars.day.stem.ordinal() as i32);
        prop_assert_eq!(record.year_branch - 1, pillars.year.branch.ordinal() as i32);
    }

    #[test]
    fn out_of_range_stems_fail(record in valid_record(), bad in prop_oneof![-50..=0i32, 11..100i32]) {
        let record = MappingRecord { month_stem: bad, ..record };
        prop_assert!(PillarCalculator::new(Fixed(record)).pillars(2000, 1, 1, 0).is_err());
    }

    #[test]
    fn tally_sums_to_eight(record in valid_record(), hour in 0..24u32) {
        let pillars = PillarCalculator::new(Fixed(record)).pillars(2000, 1, 1, hour).unwrap();
        prop_assert_eq!(8, analysis::five_factors(&pillars).total());
    }

    #[test]
    fn life_number_in_range_and_mirrored(year in -5000..5000i32) {
        let male = analysis::life_number(year, Gender::Male);
        let female = analysis::life_number(year, Gender::Female);
        prop_assert!((1..=9).contains(&male));
        prop_assert!((1..=9).contains(&female));
        prop_assert_eq!(10, male + female);
    }

    #[test]
    fn pillars_are_deterministic(record in valid_record(), hour in any::<u32>()) {
        let calc = PillarCalculator::new(Fixed(record));
        prop_assert_eq!(
            calc.pillars(1984, 2, 5, hour).unwrap(),
            calc.pillars(1984, 2, 5, hour).unwrap()
        );
    }

    #[test]
    fn hours_out_of_range_fall_back_to_zi(hour in 24..=u32::MAX) {
        prop_assert_eq!(Branch::ZI, hour_branch(hour));
    }
}

#[test]
fn midnight_wraps() {
    assert_eq!(hour_branch(23), hour_branch(0));
    for hour in (1..23).step_by(2) {
        assert_eq!(hour_branch(hour), hour_branch(hour + 1), "hour {hour}");
        assert_ne!(hour_branch(hour), hour_branch(hour - 1), "hour {hour}");
    }
}

#[test]
fn five_rats_cycle() {
    let stems: Vec<Stem> = (0..10).filter_map(Stem::new).collect();
    let branches: Vec<Branch> = (0..12).filter_map(Branch::new).collect();
    for &day in &stems {
        let hours: Vec<Stem> = branches.iter().map(|&b| hour_stem(day, b)).collect();
        let mut first_ten = hours[..10].to_vec();
        first_ten.sort();
        first_ten.dedup();
        assert_eq!(10, first_ten.len(), "day stem {}", day.name());
        assert_eq!(hours[0], hours[10]);
        assert_eq!(hours[1], hours[11]);

        let partner = day.offset(5);
        let partner_hours: Vec<Stem> = branches.iter().map(|&b| hour_stem(partner, b)).collect();
        assert_eq!(hours, partner_hours, "{} and {}", day.name(), partner.name());
    }
    let mut zi_stems: Vec<_> = stems[..5].iter().map(|&d| hour_stem(d, Branch::ZI)).collect();
    zi_stems.sort();
    zi_stems.dedup();
    assert_eq!(5, zi_stems.len());
}
