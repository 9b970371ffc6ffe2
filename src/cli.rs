use std::path::PathBuf;

use bazi::Gender;
use clap::Parser;

/// Four pillars chart calculator.
#[derive(Parser)]
#[command(
    name = "bazi",
    version,
    about = "Derive a four pillars chart and its associations"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "bazi.toml")]
    pub config: PathBuf,

    /// Path to the date mapping JSON; overrides the config file.
    #[arg(short, long, env = "BAZI_MAPPING")]
    pub mapping: Option<PathBuf>,

    /// Gender of the subject (male or female); overrides the config file.
    #[arg(short, long)]
    pub gender: Option<Gender>,

    /// Print the complete analysis as JSON.
    #[arg(long)]
    pub json: bool,

    /// Birth date as YYYY-MM-DD.
    pub date: String,

    /// Birth hour, 0-23.
    pub hour: u32,
}
