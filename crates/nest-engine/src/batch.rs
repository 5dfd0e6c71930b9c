use nest_core::{ConstrainedSampler, ErrorInfo, Likelihood, NestError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{BatchConfig, FailurePolicy};
use crate::determinism;
use crate::kernel;

/// Outcome of one run inside a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Position of the run within the batch.
    pub index: usize,
    /// Seed the run was driven by.
    pub seed: u64,
    /// `ln Z` of the run, absent when the run failed.
    pub log_evidence: Option<f64>,
    /// Iterations performed, zero when the run failed.
    pub iterations: usize,
    /// Error that aborted the run, when [`FailurePolicy::Skip`] let the batch continue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<NestError>,
}

/// Deviation of the batch mean from a known closed-form evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExactComparison {
    /// `ln Z_exact`.
    pub log_evidence_exact: f64,
    /// `mean(ln Z) - ln Z_exact`.
    pub deviation: f64,
    /// `|deviation| / standard_error`.
    pub deviation_in_errors: f64,
}

/// Statistics of `ln Z` over the completed runs of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Per-run records in run order.
    pub runs: Vec<RunRecord>,
    /// Number of runs that produced an evidence estimate.
    pub completed: usize,
    /// Number of runs skipped because they failed.
    pub failed: usize,
    /// Mean of `ln Z` over completed runs.
    pub mean_log_evidence: f64,
    /// Population variance `mean(ln Z^2) - mean(ln Z)^2`.
    pub variance_log_evidence: f64,
    /// Standard error of the mean, `sqrt(variance / (completed - 1))`.
    pub standard_error: f64,
    /// Mean iteration count over completed runs.
    pub mean_iterations: f64,
    /// Comparison against a closed-form evidence, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<ExactComparison>,
}

impl BatchSummary {
    /// `ln Z` of every completed run, in run order.
    pub fn log_evidences(&self) -> Vec<f64> {
        self.runs.iter().filter_map(|run| run.log_evidence).collect()
    }

    /// Attaches the deviation from the closed-form evidence `exact_evidence`.
    pub fn with_exact(mut self, exact_evidence: f64) -> Self {
        let log_evidence_exact = exact_evidence.ln();
        let deviation = self.mean_log_evidence - log_evidence_exact;
        self.exact = Some(ExactComparison {
            log_evidence_exact,
            deviation,
            deviation_in_errors: deviation.abs() / self.standard_error,
        });
        self
    }
}

/// Performs `config.runs` independent runs and summarizes their `ln Z`.
///
/// Run `k` is seeded with [`determinism::run_seed`] of the master seed, so any
/// single run can be replayed on its own.
pub fn run_batch<L, S>(
    config: &BatchConfig,
    likelihood: &L,
    sampler: &S,
) -> Result<BatchSummary, NestError>
where
    L: Likelihood + ?Sized,
    S: ConstrainedSampler + ?Sized,
{
    config.validate()?;
    let master_seed = config.run.seed_policy.master_seed;
    info!(
        runs = config.runs,
        n_samples = config.run.n_samples,
        tolerance = config.run.tolerance,
        master_seed,
        "starting batch"
    );

    let mut records = Vec::with_capacity(config.runs);
    for index in 0..config.runs {
        let seed = determinism::run_seed(master_seed, index);
        let mut rng = determinism::run_rng(master_seed, index);
        match kernel::run_with_rng(&config.run, likelihood, sampler, &mut rng) {
            Ok(result) => {
                debug!(
                    run = index,
                    iterations = result.iterations,
                    log_evidence = result.log_evidence(),
                    "run completed"
                );
                records.push(RunRecord {
                    index,
                    seed,
                    log_evidence: Some(result.log_evidence()),
                    iterations: result.iterations,
                    error: None,
                });
            }
            Err(err) => match config.failure_policy {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::Skip => {
                    warn!(run = index, error = %err, "run failed; skipping");
                    records.push(RunRecord {
                        index,
                        seed,
                        log_evidence: None,
                        iterations: 0,
                        error: Some(err),
                    });
                }
            },
        }
    }

    summarize(records)
}

fn summarize(runs: Vec<RunRecord>) -> Result<BatchSummary, NestError> {
    let completed: Vec<(f64, usize)> = runs
        .iter()
        .filter_map(|run| run.log_evidence.map(|value| (value, run.iterations)))
        .collect();
    let count = completed.len();
    if count < 2 {
        return Err(NestError::Numeric(
            ErrorInfo::new(
                "batch-too-few-completed",
                "fewer than two runs completed; no standard error exists",
            )
            .with_context("completed", count.to_string())
            .with_context("requested", runs.len().to_string()),
        ));
    }

    let n = count as f64;
    let mean = completed.iter().map(|(value, _)| value).sum::<f64>() / n;
    let mean_sq = completed.iter().map(|(value, _)| value * value).sum::<f64>() / n;
    let variance = (mean_sq - mean * mean).max(0.0);
    let standard_error = (variance / (n - 1.0)).sqrt();
    let mean_iterations = completed.iter().map(|&(_, iters)| iters as f64).sum::<f64>() / n;

    Ok(BatchSummary {
        failed: runs.len() - count,
        runs,
        completed: count,
        mean_log_evidence: mean,
        variance_log_evidence: variance,
        standard_error,
        mean_iterations,
        exact: None,
    })
}
