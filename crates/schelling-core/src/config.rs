//! Configuration
//!
//! Run settings and model parameters loaded from a TOML file. Missing
//! sections and fields fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::ParamError;
use crate::params::SchellingParams;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "schelling.toml";

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub model: SchellingParams,
}

/// How the driver runs the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed for the single random source
    pub seed: u64,
    /// Ticks to run
    pub ticks: u64,
    /// Directory for the tick log, statistics and snapshots
    pub output_dir: PathBuf,
    /// Ticks between grid snapshots; 0 disables periodic snapshots
    pub snapshot_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ticks: 100,
            output_dir: PathBuf::from("output"),
            snapshot_interval: 0,
        }
    }
}

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid model parameters: {0}")]
    Invalid(#[from] ParamError),
}

impl SimConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(content)?;
        config.model.validate()?;
        Ok(config)
    }

    /// Load from a path, or use defaults if it is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        Self::from_file(path).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", path.display(), e);
            Self::default()
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Schelling Segregation with Social Influencers

[run]
seed = 42
ticks = 100
output_dir = "output"
# 0 disables periodic snapshots
snapshot_interval = 0

[model]
height = 20
width = 20
density = 0.8
minority_pc = 0.2
homophily = 3
num_positive = 1
positive_tolerance = 8
num_negative = 1
negative_tolerance = 2
majority_type = 0
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();

        assert_eq!(config.run.seed, 42);
        assert_eq!(config.run.ticks, 100);
        assert_eq!(config.run.snapshot_interval, 0);
        assert_eq!(config.model, SchellingParams::default());
    }

    #[test]
    fn test_default_config_toml_parses() {
        let config = SimConfig::from_str(&default_config_toml()).unwrap();

        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
            [model]
            density = 0.3
            num_positive = 4
        "#;

        let config = SimConfig::from_str(toml).unwrap();

        assert_eq!(config.model.density, 0.3);
        assert_eq!(config.model.num_positive, 4);
        assert_eq!(config.model.width, 20);
        assert_eq!(config.run.seed, 42);
    }

    #[test]
    fn test_invalid_model_rejected() {
        let toml = r#"
            [model]
            minority_pc = 1.5
        "#;

        let err = SimConfig::from_str(toml).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(ParamError::Probability { .. })));
    }

    #[test]
    fn test_negative_count_rejected_by_parser() {
        let toml = r#"
            [model]
            num_negative = -1
        "#;

        assert!(matches!(SimConfig::from_str(toml), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = SimConfig::default();
        config.run.ticks = 250;
        config.model.homophily = 5;

        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[run]"));
        assert!(toml.contains("[model]"));

        assert_eq!(SimConfig::from_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SimConfig::load_or_default(Path::new("does/not/exist.toml"));

        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_load_or_default_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&path, "[model]\ndensity = 4.0\n").unwrap();

        assert_eq!(SimConfig::load_or_default(&path), SimConfig::default());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&path, "[run]\nticks = 7\n").unwrap();

        let config = SimConfig::from_file(&path).unwrap();

        assert_eq!(config.run.ticks, 7);
    }
}
