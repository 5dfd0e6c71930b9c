use std::fs;
use std::path::Path;

use nest_core::{ErrorInfo, NestError};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a single nested-sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Size of the live population (`n_samples`, at least 2).
    #[serde(default = "default_n_samples")]
    pub n_samples: usize,
    /// Stopping tolerance `f`: the run ends once `L_max * X_i < f * Z`.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Master seed and labelling policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_n_samples() -> usize {
    32
}

fn default_tolerance() -> f64 {
    1e-3
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n_samples: default_n_samples(),
            tolerance: default_tolerance(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl RunConfig {
    /// Builds a configuration with the given population size and tolerance.
    pub fn new(n_samples: usize, tolerance: f64) -> Self {
        Self {
            n_samples,
            tolerance,
            ..Self::default()
        }
    }

    /// Rejects parameters that cannot describe a valid run.
    pub fn validate(&self) -> Result<(), NestError> {
        if self.n_samples < 2 {
            return Err(NestError::InvalidConfiguration(
                ErrorInfo::new(
                    "n-samples-too-small",
                    "population must hold at least two samples",
                )
                .with_context("n_samples", self.n_samples.to_string()),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(NestError::InvalidConfiguration(
                ErrorInfo::new(
                    "tolerance-not-positive",
                    "stopping tolerance must be a finite positive number",
                )
                .with_context("tolerance", self.tolerance.to_string())
                .with_hint("typical values are well below 1, e.g. 1e-3"),
            ));
        }
        Ok(())
    }

    /// Parses and validates a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, NestError> {
        let config: RunConfig = serde_yaml::from_str(text).map_err(|err| {
            NestError::Serde(ErrorInfo::new("config-parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, NestError> {
        let text = fs::read_to_string(path).map_err(|err| {
            NestError::Serde(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text).map_err(|err| match err {
            NestError::Serde(info) => {
                NestError::Serde(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml_string(&self) -> Result<String, NestError> {
        serde_yaml::to_string(self)
            .map_err(|err| NestError::Serde(ErrorInfo::new("config-serialize", err.to_string())))
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run (or for deriving per-run seeds in a batch).
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label recorded alongside reports.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

/// What a batch does when one of its runs fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop the batch and return the first error.
    #[default]
    Abort,
    /// Record the failure and continue with the next run.
    Skip,
}

/// Settings for a batch of independent runs sharing one [`RunConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Per-run parameters; `seed_policy.master_seed` seeds the whole batch.
    #[serde(default)]
    pub run: RunConfig,
    /// Number of independent runs (at least 2, so a standard error exists).
    #[serde(default = "default_runs")]
    pub runs: usize,
    /// Handling of failed runs.
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

fn default_runs() -> usize {
    100
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            runs: default_runs(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl BatchConfig {
    /// Validates the embedded run configuration and the run count.
    pub fn validate(&self) -> Result<(), NestError> {
        self.run.validate()?;
        if self.runs < 2 {
            return Err(NestError::InvalidConfiguration(
                ErrorInfo::new("runs-too-few", "a batch needs at least two runs")
                    .with_context("runs", self.runs.to_string()),
            ));
        }
        Ok(())
    }
}
