use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bazi::Gender;
use serde::Deserialize;
use tracing::debug;

/// Settings read from `bazi.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaziConfig {
    /// Path to the date mapping JSON.
    #[serde(default)]
    pub mapping: Option<PathBuf>,

    /// Gender used when none is given on the command line.
    #[serde(default)]
    pub gender: Gender,
}

impl BaziConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Reads the configuration file at `path`.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}
