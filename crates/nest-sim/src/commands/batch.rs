use std::error::Error;

use clap::Args;
use nest_engine::{run_batch, BatchConfig, BatchSummary, FailurePolicy};
use serde::Serialize;
use tracing::info;

use super::{emit_json, ModelInfo, RunOptions};

#[derive(Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    pub options: RunOptions,
    /// Number of independent runs.
    #[arg(long, default_value_t = 100)]
    pub runs: usize,
    /// Keep going when a run fails instead of aborting the batch.
    #[arg(long)]
    pub skip_failures: bool,
    /// Omit per-run records from the report.
    #[arg(long)]
    pub summary_only: bool,
}

#[derive(Debug, Serialize)]
struct BatchReport {
    model: ModelInfo,
    config: BatchConfig,
    summary: BatchSummary,
}

pub fn run(args: &BatchArgs) -> Result<(), Box<dyn Error>> {
    let well = args.options.model()?;
    let config = BatchConfig {
        run: args.options.run_config()?,
        runs: args.runs,
        failure_policy: if args.skip_failures {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        },
    };

    let mut summary = run_batch(&config, &well, &well)?.with_exact(well.exact_evidence());
    if let Some(exact) = &summary.exact {
        info!(
            mean_log_evidence = summary.mean_log_evidence,
            standard_error = summary.standard_error,
            deviation_in_errors = exact.deviation_in_errors,
            "batch finished"
        );
    }
    if args.summary_only {
        summary.runs.clear();
    }

    let report = BatchReport {
        model: ModelInfo::from_well(&well),
        config,
        summary,
    };
    emit_json(args.options.out.as_deref(), &report)
}
