/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::path::PathBuf;

use crate::common;
use seasons_sync::app_config::{Config, LogLevel, NumberingMode};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.input_path, PathBuf::from("src/data/sopranos-original.xml"));
    assert_eq!(config.output_path, PathBuf::from("src/data/seasons.json"));
    assert_eq!(config.season_prefix, "Season");
    assert_eq!(config.numbering, NumberingMode::PerSeason);
    assert!(config.translate);
    assert!(!config.imdb.enabled);
    assert_eq!(config.series.title, "The Sopranos");
    assert_eq!(config.series.seasons, 6);
    assert_eq!(config.series.total_episodes, 86);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    config.season_prefix = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.output_path = config.input_path.clone();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.input_path = PathBuf::new();
    assert!(config.validate().is_err());
}

/// Test loading a partial config file keeps defaults for missing fields
#[test]
fn test_config_load_withPartialFile_shouldMergeDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "output_path": "out/seasons.json", "numbering": "global", "imdb": { "enabled": true } }"#,
    )?;

    let config = Config::load(&path)?;
    assert_eq!(config.output_path, PathBuf::from("out/seasons.json"));
    assert_eq!(config.numbering, NumberingMode::Global);
    assert!(config.imdb.enabled);
    assert_eq!(config.imdb.ratings_path, None);
    assert_eq!(config.input_path, Config::default().input_path);
    assert!(config.translate);
    Ok(())
}

/// Test a missing config file falls back to defaults
#[test]
fn test_config_load_withMissingFile_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load(temp_dir.path().join("absent.json"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

/// Test an unparsable config file is an error
#[test]
fn test_config_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;
    assert!(Config::load(&path).is_err());
    Ok(())
}

/// Test numbering mode parsing and display
#[test]
fn test_numberingMode_fromStr_shouldAcceptKnownNames() {
    assert_eq!("global".parse::<NumberingMode>().unwrap(), NumberingMode::Global);
    assert_eq!("Per-Season".parse::<NumberingMode>().unwrap(), NumberingMode::PerSeason);
    assert!("weekly".parse::<NumberingMode>().is_err());
    assert_eq!(NumberingMode::PerSeason.to_string(), "per-season");
}

/// Test config round-trips through JSON with kebab-case numbering
#[test]
fn test_config_serialize_shouldUseKebabCaseNumbering() -> Result<()> {
    let config = Config {
        numbering: NumberingMode::Global,
        ..Config::default()
    };
    let json = serde_json::to_string(&config)?;
    assert!(json.contains(r#""numbering":"global""#));
    assert!(json.contains(r#""log_level":"info""#));
    Ok(())
}
