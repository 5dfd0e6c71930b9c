use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use nest_engine::RunConfig;
use nest_models::GaussianWell;
use serde::Serialize;

pub mod batch;
pub mod run;

/// Flags shared by every command that performs runs.
#[derive(Args, Debug, Clone)]
pub struct RunOptions {
    /// YAML run configuration; flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Live population size.
    #[arg(long)]
    pub n_samples: Option<usize>,
    /// Stopping tolerance f.
    #[arg(long, short = 'f')]
    pub tolerance: Option<f64>,
    /// Master seed.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Inverse width of the Gaussian well exp(-beta * theta^2 / 2).
    #[arg(long, default_value_t = 100.0)]
    pub beta: f64,
    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl RunOptions {
    pub fn run_config(&self) -> Result<RunConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(n_samples) = self.n_samples {
            config.n_samples = n_samples;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(seed) = self.seed {
            config.seed_policy.master_seed = seed;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn model(&self) -> Result<GaussianWell, Box<dyn Error>> {
        Ok(GaussianWell::new(self.beta)?)
    }
}

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub name: &'static str,
    pub beta: f64,
    pub exact_evidence: f64,
    pub exact_log_evidence: f64,
}

impl ModelInfo {
    pub fn from_well(well: &GaussianWell) -> Self {
        let exact_evidence = well.exact_evidence();
        Self {
            name: "gaussian-well",
            beta: well.beta(),
            exact_evidence,
            exact_log_evidence: exact_evidence.ln(),
        }
    }
}

pub fn emit_json<T: Serialize>(out: Option<&Path>, value: &T) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
