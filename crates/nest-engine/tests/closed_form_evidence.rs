use nest_engine::{run_batch, BatchConfig, FailurePolicy, RunConfig};
use nest_models::GaussianWell;

#[test]
fn mean_log_evidence_matches_gaussian_well() {
    let well = GaussianWell::new(100.0).unwrap();
    let mut run = RunConfig::new(50, 2e-3);
    run.seed_policy.master_seed = 2016;
    let config = BatchConfig {
        run,
        runs: 1000,
        failure_policy: FailurePolicy::Abort,
    };

    let summary = run_batch(&config, &well, &well)
        .unwrap()
        .with_exact(well.exact_evidence());
    let exact = summary.exact.unwrap();

    assert_eq!(summary.completed, 1000);
    assert_eq!(summary.failed, 0);
    assert!(summary.standard_error > 0.0);
    // Per-run spread of ln Z is a few tenths of a nat at n = 50.
    assert!(
        summary.variance_log_evidence.sqrt() < 0.4,
        "spread {}",
        summary.variance_log_evidence.sqrt()
    );
    assert!(
        exact.deviation_in_errors < 5.0,
        "mean ln Z {} vs exact {} ({} standard errors)",
        summary.mean_log_evidence,
        exact.log_evidence_exact,
        exact.deviation_in_errors
    );
}
