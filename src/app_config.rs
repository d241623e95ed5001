use anyhow::{anyhow, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;
use crate::models::SeriesInfo;

/// Application configuration module
/// This module handles loading and validating the settings of a sync run.
/// Every field has a default, so a partial (or absent) config file works.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// SpreadsheetML workbook to read
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// JSON document to write
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Worksheet name prefix that marks a season table
    #[serde(default = "default_season_prefix")]
    pub season_prefix: String,

    /// Episode numbering scheme
    #[serde(default)]
    pub numbering: NumberingMode,

    /// Whether descriptions are glossed from Swedish to English
    #[serde(default = "default_true")]
    pub translate: bool,

    /// Static series metadata written to `seriesInfo`
    #[serde(default)]
    pub series: SeriesInfo,

    /// IMDb enrichment settings
    #[serde(default)]
    pub imdb: ImdbConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// How episodes are numbered in the output
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingMode {
    // @mode: Only the in-season number
    #[default]
    PerSeason,
    // @mode: Also a running number across all seasons
    Global,
}

impl std::fmt::Display for NumberingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerSeason => write!(f, "per-season"),
            Self::Global => write!(f, "global"),
        }
    }
}

impl std::str::FromStr for NumberingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "per-season" | "season" => Ok(Self::PerSeason),
            "global" => Ok(Self::Global),
            _ => Err(anyhow!("Invalid numbering mode: {}", s)),
        }
    }
}

/// IMDb link and rating enrichment
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ImdbConfig {
    /// Add `imdbLink` and `imdbRating` to every episode
    #[serde(default)]
    pub enabled: bool,

    /// JSON file with ratings per season; ratings default to 0 without it
    #[serde(default)]
    pub ratings_path: Option<PathBuf>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("src/data/sopranos-original.xml")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("src/data/seasons.json")
}

fn default_season_prefix() -> String {
    "Season".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load a configuration file, falling back to defaults when it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = FileManager::read_to_string(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(anyhow!("Input path must not be empty"));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(anyhow!("Output path must not be empty"));
        }

        if self.input_path == self.output_path {
            return Err(anyhow!(
                "Input and output paths must differ: {:?}",
                self.input_path
            ));
        }

        if self.season_prefix.trim().is_empty() {
            return Err(anyhow!("Season prefix must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: default_input_path(),
            output_path: default_output_path(),
            season_prefix: default_season_prefix(),
            numbering: NumberingMode::default(),
            translate: true,
            series: SeriesInfo::default(),
            imdb: ImdbConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
