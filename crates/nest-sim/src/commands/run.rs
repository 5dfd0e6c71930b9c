use std::error::Error;

use clap::Args;
use nest_engine::{RunConfig, RunResult};
use serde::Serialize;
use tracing::info;

use super::{emit_json, ModelInfo, RunOptions};

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub options: RunOptions,
    /// Include the volume sequence, discard record and evidence trace.
    #[arg(long)]
    pub trace: bool,
}

#[derive(Debug, Serialize)]
struct RunReport {
    model: ModelInfo,
    config: RunConfig,
    evidence: f64,
    log_evidence: f64,
    iterations: usize,
    tail_correction: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<RunResult>,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let config = args.options.run_config()?;
    let well = args.options.model()?;
    let result = nest_engine::run(&config, &well, &well)?;
    info!(
        evidence = result.evidence,
        iterations = result.iterations,
        "run finished"
    );

    let report = RunReport {
        model: ModelInfo::from_well(&well),
        evidence: result.evidence,
        log_evidence: result.log_evidence(),
        iterations: result.iterations,
        tail_correction: result.tail_correction,
        trace: args.trace.then_some(result),
        config,
    };
    emit_json(args.options.out.as_deref(), &report)
}
