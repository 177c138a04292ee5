use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::params::{BinningPolicy, RateParameters, ShiftParameters, TimingModel};
use crate::sweep::SweepRange;

/// Everything one estimation needs. Built once per input change and never mutated
/// by the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub rates: RateParameters,
    pub model: TimingModel,
    pub shift: ShiftParameters,
    pub sweep: SweepRange,
    pub binning_policy: BinningPolicy,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EstimatorConfig {
    pub fn with_rates(mut self, rates: RateParameters) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_model(mut self, model: TimingModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_shift_minutes(mut self, shift_duration_min: u32) -> Self {
        self.shift = ShiftParameters::new(shift_duration_min);
        self
    }

    pub fn with_sweep(mut self, start: u32, end: u32, step: u32) -> Self {
        self.sweep = SweepRange::new(start, end, step);
        self
    }

    pub fn with_binning_policy(mut self, binning_policy: BinningPolicy) -> Self {
        self.binning_policy = binning_policy;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file. Fields missing from the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded estimator config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "saved estimator config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EstimatorConfig::from_json_str(
            r#"{ "shift": { "shift_duration_min": 480 }, "sweep": { "start": 50, "end": 500, "step": 25 } }"#,
        )
        .unwrap();

        assert_eq!(config.shift.shift_duration_min, 480);
        assert_eq!(config.sweep, SweepRange::new(50, 500, 25));
        assert_eq!(config.rates, RateParameters::default());
        assert_eq!(config.model, TimingModel::per_item());
    }

    #[test]
    fn save_then_load_restores_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimator.json");
        let config = EstimatorConfig::default()
            .with_model(TimingModel::basket_level())
            .with_binning_policy(BinningPolicy::SeparateCategory)
            .with_shift_minutes(240);

        config.save(&path).unwrap();
        let loaded = EstimatorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = EstimatorConfig::load("/nonexistent/estimator.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/estimator.json"));
    }
}
