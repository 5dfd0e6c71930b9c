use nest_core::{is_unconstrained, NestError, RngHandle};
use nest_engine::{run, RunConfig};
use rand::Rng;

// L(θ) = θ on a uniform prior over [0, 1]; the feasible set of floor c is (c, 1].
fn identity(theta: f64) -> f64 {
    theta
}

fn midpoint_sampler(floor: f64, rng: &mut RngHandle) -> Result<f64, NestError> {
    if is_unconstrained(floor) {
        return Ok(rng.gen_range(0.0..1.0));
    }
    Ok((floor + 1.0) / 2.0)
}

#[test]
fn two_member_midpoint_run_terminates() {
    let mut config = RunConfig::new(2, 1e-3);
    config.seed_policy.master_seed = 77;
    let result = run(&config, &identity, &midpoint_sampler).unwrap();

    assert!(result.iterations > 0);
    assert!(result.iterations < 10_000, "ran {} iterations", result.iterations);
    assert_eq!(result.volumes.len(), result.discarded.len());
    assert!(result.evidence > 0.0);
    // Every constrained replacement sits halfway between its floor and the maximum.
    assert!(result.live.iter().all(|sample| sample.likelihood <= 1.0));
}

#[test]
fn midpoint_runs_terminate_for_many_seeds() {
    for seed in 0..64 {
        let mut config = RunConfig::new(2, 1e-2);
        config.seed_policy.master_seed = seed;
        let result = run(&config, &identity, &midpoint_sampler).unwrap();
        assert!(result.iterations < 10_000);
    }
}
