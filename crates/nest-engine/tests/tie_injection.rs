use nest_core::{LiveSample, NestError, RngHandle};
use nest_engine::{run, EnginePhase, NestedSampler, RunConfig};
use nest_models::GaussianWell;

#[test]
fn injected_tie_raises_degenerate_minimum() {
    let well = GaussianWell::new(100.0).unwrap();
    let config = RunConfig::new(4, 1e-3);
    let members = vec![
        LiveSample::new(0.3, 0.2),
        LiveSample::new(-0.3, 0.2),
        LiveSample::new(0.1, 0.6),
        LiveSample::new(0.0, 0.9),
    ];
    let mut engine = NestedSampler::with_population(&config, &well, &well, members).unwrap();
    assert_eq!(engine.phase(), EnginePhase::Iterating);

    let mut rng = RngHandle::from_seed(0);
    let err = engine.step(&mut rng).unwrap_err();
    assert!(err.is_degenerate_minimum(), "unexpected error {err}");
    assert_eq!(err.info().context.get("indices").map(String::as_str), Some("0,1"));

    // Nothing was discarded or accumulated.
    assert_eq!(engine.discarded(), &[0.0]);
    assert_eq!(engine.volumes(), &[1.0]);
    assert_eq!(engine.evidence(), 0.0);
}

#[test]
fn constant_likelihood_aborts_the_run() {
    let flat = |_theta: f64| 0.5;
    let sampler = |_floor: f64, _rng: &mut RngHandle| -> Result<f64, NestError> { Ok(0.25) };
    let err = run(&RunConfig::new(3, 1e-3), &flat, &sampler).unwrap_err();
    assert!(matches!(err, NestError::DegenerateMinimum(_)));
}

#[test]
fn population_size_must_match_config() {
    let well = GaussianWell::new(100.0).unwrap();
    let config = RunConfig::new(3, 1e-3);
    let members = vec![LiveSample::new(0.1, 0.6), LiveSample::new(0.2, 0.1)];
    let err = NestedSampler::with_population(&config, &well, &well, members)
        .err()
        .unwrap();
    assert_eq!(err.info().code, "population-size-mismatch");
}

#[test]
fn invalid_likelihoods_are_collaborator_errors() {
    let sampler = |_floor: f64, rng: &mut RngHandle| -> Result<f64, NestError> {
        Ok(rng.uniform_open01())
    };
    let negative = |theta: f64| -theta;
    let err = run(&RunConfig::new(4, 1e-3), &negative, &sampler).unwrap_err();
    assert!(matches!(err, NestError::Collaborator(_)));
    assert_eq!(err.info().code, "likelihood-out-of-range");

    let nan = |_theta: f64| f64::NAN;
    let err = run(&RunConfig::new(4, 1e-3), &nan, &sampler).unwrap_err();
    assert!(matches!(err, NestError::Collaborator(_)));
}
