//! Simulator configuration file.
//!
//! A TOML file may set the log level, a log file, the output format, a
//! custom rate table and any subset of the scenario inputs:
//!
//! ```toml
//! log_level = "debug"
//! format = "json"
//!
//! [[rate_tiers]]
//! min_sales = 0
//! rate = 0.50
//!
//! [inputs]
//! self_sales = 1200
//! ```
//!
//! Every key is optional; command-line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use roi_core::{ProjectionEngine, ProjectionInputs, RateSchedule};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML, has unknown keys, or holds a rate table
    /// that does not validate.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// How a report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// Replaces the standard rate table when present.
    pub rate_tiers: Option<RateSchedule>,
    pub inputs: ProjectionInputs,
}

impl SimulatorConfig {
    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Engine using the configured rate table, or the standard one.
    pub fn engine(&self) -> ProjectionEngine {
        self.rate_tiers
            .clone()
            .map_or_else(ProjectionEngine::standard, ProjectionEngine::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_gives_defaults() {
        let config = SimulatorConfig::from_toml_str("").unwrap();

        assert_eq!(config, SimulatorConfig::default());
        assert_eq!(config.engine().schedule(), &RateSchedule::standard());
    }

    #[test]
    fn parses_all_sections() {
        let config = SimulatorConfig::from_toml_str(
            r#"
            log_level = "debug"
            log_file = "roi.log"
            format = "json"

            [[rate_tiers]]
            min_sales = 0
            rate = 0.50

            [[rate_tiers]]
            min_sales = 1000
            rate = 0.65

            [inputs]
            self_sales = 1200
            misc_cost = 2.5
            recruitment_count = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("roi.log")));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.inputs.self_sales, dec!(1200));
        assert_eq!(config.inputs.misc_cost, dec!(2.5));
        assert_eq!(config.inputs.recruitment_count, 10);
        assert_eq!(config.inputs.rent_cost, dec!(15));

        let engine = config.engine();
        assert_eq!(engine.schedule().rate(dec!(1200)), dec!(0.65));
        assert_eq!(engine.schedule().rate(dec!(999)), dec!(0.50));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(SimulatorConfig::from_toml_str("colour = \"red\"").is_err());
        assert!(SimulatorConfig::from_toml_str("[inputs]\nrevenue = 10").is_err());
    }

    #[test]
    fn rejects_rate_table_without_base_tier() {
        let err = SimulatorConfig::from_toml_str(
            r#"
            [[rate_tiers]]
            min_sales = 500
            rate = 0.6
            "#,
        );

        assert!(err.is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SimulatorConfig::load(Path::new("does-not-exist.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
