mod cli;
mod config;
mod logging;

use std::process;

use anyhow::{Context, Result, anyhow};
use bazi::ganzhi::Branch;
use bazi::{BaziCalculator, Date, Error, table::MappingTable};
use clap::Parser;

use crate::cli::Cli;
use crate::config::BaziConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = BaziConfig::load(&cli.config)?;
    let mapping = cli
        .mapping
        .or(config.mapping)
        .ok_or_else(|| {
            anyhow!("no date mapping given (use --mapping, BAZI_MAPPING or the config file)")
        })?;
    let gender = cli.gender.unwrap_or(config.gender);
    let (year, month, day) = parse_date(&cli.date)?;

    let table = MappingTable::load(&mapping)?;
    let calc = BaziCalculator::new(year, month, day, cli.hour, gender, table);
    let complete = calc.complete_analysis()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&complete)?);
        return Ok(());
    }

    let analysis = &complete.basic_analysis;
    let names = |branches: &[Branch]| {
        branches.iter().map(|b| b.name()).collect::<Vec<_>>().join("")
    };
    let optional = |branch: Option<Branch>| branch.map_or("-", |b| b.name());
    let factors = &analysis.five_factors;
    let mansions = &analysis.eight_mansions;

    println!("{}", complete.main_pillars);
    println!("life number:   {}", analysis.life_number);
    println!(
        "day master:    {} ({:?} {})",
        analysis.day_master.stem.name(),
        analysis.day_master.polarity,
        analysis.day_master.element.name()
    );
    println!("nobleman:      {}", names(analysis.nobleman.as_slice()));
    println!("intelligence:  {}", optional(analysis.intelligence));
    println!("sky horse:     {}", optional(analysis.sky_horse));
    println!("peach blossom: {}", optional(analysis.peach_blossom));
    println!(
        "five elements: 木{} 火{} 土{} 金{} 水{}",
        factors.wood, factors.fire, factors.earth, factors.metal, factors.water
    );
    println!(
        "eight mansions: {:?} group, lucky {} {} {} {}, unlucky {} {} {} {}",
        mansions.group,
        mansions.lucky.wealth,
        mansions.lucky.health,
        mansions.lucky.romance,
        mansions.lucky.career,
        mansions.unlucky.obstacles,
        mansions.unlucky.quarrels,
        mansions.unlucky.setbacks,
        mansions.unlucky.total_loss,
    );
    Ok(())
}

/// Parses `YYYY-MM-DD` into a real Gregorian date.
fn parse_date(text: &str) -> Result<(i32, u32, u32)> {
    let mut parts = text.splitn(3, '-');
    let mut next = |what: &str| {
        parts
            .next()
            .with_context(|| format!("missing {what} in date {text:?}"))
    };
    let year: i32 = next("year")?.parse().context("invalid year")?;
    let month: u32 = next("month")?.parse().context("invalid month")?;
    let day: u32 = next("day")?.parse().context("invalid day")?;
    Date::from_gregorian(year, month, day).ok_or(Error::InvalidDate { year, month, day })?;
    Ok((year, month, day))
}
