use nest_core::{
    is_unconstrained, ConstrainedSampler, ErrorInfo, Likelihood, LiveSample, NestError, RngHandle,
    NO_CONSTRAINT,
};
use serde::{Deserialize, Serialize};
use tracing::{info, trace, warn};

use crate::config::RunConfig;
use crate::evidence::EvidenceAccumulator;
use crate::population::Population;
use crate::stopping;
use crate::volume::VolumeEstimator;

/// Lifecycle of a [`NestedSampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    /// Created; the live population has not been drawn yet.
    Initializing,
    /// Discarding and replacing live samples.
    Iterating,
    /// The stopping rule held; only [`NestedSampler::finish`] remains.
    Terminated,
}

/// Outcome of a single discard/replace iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The stopping rule does not hold yet.
    Continue,
    /// The stopping rule holds; the sampler moved to [`EnginePhase::Terminated`].
    Stop,
}

/// Everything a completed run hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Final evidence estimate, tail correction included.
    pub evidence: f64,
    /// Volume sequence `X_0 = 1, X_1, ...`; one entry per iteration plus `X_0`.
    pub volumes: Vec<f64>,
    /// Discarded likelihoods `P_0 = 0, P_1, ...`, parallel to `volumes`.
    pub discarded: Vec<f64>,
    /// Number of discard/replace iterations performed.
    pub iterations: usize,
    /// Evidence after each iteration, before the tail correction.
    pub evidence_trace: Vec<f64>,
    /// `X_last * max(live likelihood)` added at termination.
    pub tail_correction: f64,
    /// Live population at termination.
    pub live: Vec<LiveSample>,
}

impl RunResult {
    /// Natural logarithm of the evidence estimate.
    pub fn log_evidence(&self) -> f64 {
        self.evidence.ln()
    }

    /// Normalized weights `P_i * w_i / Z` of the discarded samples, in discard order.
    ///
    /// The tail correction carries the remaining weight, so these sum to
    /// `1 - tail_correction / evidence`.
    pub fn posterior_weights(&self) -> Vec<f64> {
        if self.evidence <= 0.0 {
            return vec![0.0; self.iterations];
        }
        self.volumes
            .windows(2)
            .zip(self.discarded.iter().skip(1))
            .map(|(pair, likelihood)| likelihood * (pair[0] - pair[1]) / self.evidence)
            .collect()
    }
}

/// Steppable nested-sampling engine owning the state of exactly one run.
pub struct NestedSampler<'a, L: ?Sized, S: ?Sized> {
    config: RunConfig,
    likelihood: &'a L,
    sampler: &'a S,
    population: Population,
    volumes: VolumeEstimator,
    evidence: EvidenceAccumulator,
    discarded: Vec<f64>,
    phase: EnginePhase,
}

impl<'a, L, S> NestedSampler<'a, L, S>
where
    L: Likelihood + ?Sized,
    S: ConstrainedSampler + ?Sized,
{
    /// Validates `config` and prepares an engine in [`EnginePhase::Initializing`].
    pub fn new(config: &RunConfig, likelihood: &'a L, sampler: &'a S) -> Result<Self, NestError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            likelihood,
            sampler,
            population: Population::new(Vec::new()),
            volumes: VolumeEstimator::new(config.n_samples),
            evidence: EvidenceAccumulator::new(),
            discarded: vec![0.0],
            phase: EnginePhase::Initializing,
        })
    }

    /// Starts directly in [`EnginePhase::Iterating`] from an existing live population.
    pub fn with_population(
        config: &RunConfig,
        likelihood: &'a L,
        sampler: &'a S,
        members: Vec<LiveSample>,
    ) -> Result<Self, NestError> {
        let mut engine = Self::new(config, likelihood, sampler)?;
        if members.len() != config.n_samples {
            return Err(NestError::InvalidConfiguration(
                ErrorInfo::new(
                    "population-size-mismatch",
                    "initial population size must equal n_samples",
                )
                .with_context("expected", config.n_samples.to_string())
                .with_context("actual", members.len().to_string()),
            ));
        }
        for member in &members {
            check_likelihood(member.theta, member.likelihood)?;
        }
        engine.population = Population::new(members);
        engine.phase = EnginePhase::Iterating;
        Ok(engine)
    }

    /// Draws `n_samples` unconstrained prior samples and enters [`EnginePhase::Iterating`].
    pub fn initialize(&mut self, rng: &mut RngHandle) -> Result<(), NestError> {
        self.expect_phase(EnginePhase::Initializing)?;
        let mut members = Vec::with_capacity(self.config.n_samples);
        for _ in 0..self.config.n_samples {
            members.push(self.draw(NO_CONSTRAINT, rng)?);
        }
        self.population = Population::new(members);
        self.phase = EnginePhase::Iterating;
        info!(
            n_samples = self.config.n_samples,
            tolerance = self.config.tolerance,
            "nested sampling run initialized"
        );
        Ok(())
    }

    /// Discards the worst live sample, updates volume and evidence, and replaces it.
    ///
    /// A failed step leaves the run state untouched apart from the RNG.
    pub fn step(&mut self, rng: &mut RngHandle) -> Result<StepOutcome, NestError> {
        self.expect_phase(EnginePhase::Iterating)?;

        let worst = self.population.worst()?;
        let floor = self.population.likelihoods()[worst];
        let volume = self.volumes.propose(rng)?;
        let replacement = self.draw(floor, rng)?;

        if replacement.likelihood <= floor && !is_unconstrained(floor) {
            warn!(
                floor,
                likelihood = replacement.likelihood,
                "replacement does not exceed the likelihood floor; sampler fell back to the full prior"
            );
        }

        self.discarded.push(floor);
        self.volumes.commit(volume);
        let evidence = self.evidence.add(floor, volume.decrement);
        self.population.replace(worst, replacement);

        trace!(
            step = self.iterations(),
            floor,
            volume = volume.volume,
            evidence,
            "discarded worst live sample"
        );

        if self.should_stop() {
            self.phase = EnginePhase::Terminated;
            info!(
                iterations = self.iterations(),
                evidence,
                volume = volume.volume,
                "stopping rule satisfied"
            );
            Ok(StepOutcome::Stop)
        } else {
            Ok(StepOutcome::Continue)
        }
    }

    /// Evaluates `L_max * X_i < f * Z` on the current state.
    pub fn should_stop(&self) -> bool {
        stopping::should_stop(
            self.population.max_likelihood(),
            self.volumes.current(),
            self.evidence.evidence(),
            self.config.tolerance,
        )
    }

    /// Applies the tail correction and returns the run result.
    pub fn finish(mut self) -> Result<RunResult, NestError> {
        self.expect_phase(EnginePhase::Terminated)?;
        let live_max = self.population.max_likelihood();
        let evidence = self.evidence.finalize(self.volumes.current(), live_max);
        info!(
            iterations = self.iterations(),
            evidence,
            log_evidence = evidence.ln(),
            "nested sampling run terminated"
        );
        let iterations = self.iterations();
        let (evidence, evidence_trace, tail_correction) = self.evidence.into_parts();
        Ok(RunResult {
            evidence,
            volumes: self.volumes.into_sequence(),
            discarded: self.discarded,
            iterations,
            evidence_trace,
            tail_correction,
            live: self.population.into_members(),
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Iterations completed so far.
    pub fn iterations(&self) -> usize {
        self.discarded.len() - 1
    }

    /// Evidence accumulated so far, without the tail correction.
    pub fn evidence(&self) -> f64 {
        self.evidence.evidence()
    }

    /// Volume sequence recorded so far.
    pub fn volumes(&self) -> &[f64] {
        self.volumes.sequence()
    }

    /// Discarded likelihoods recorded so far, sentinel included.
    pub fn discarded(&self) -> &[f64] {
        &self.discarded
    }

    /// Live population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    fn draw(&self, floor: f64, rng: &mut RngHandle) -> Result<LiveSample, NestError> {
        let theta = self.sampler.sample(floor, rng)?;
        let likelihood = self.likelihood.evaluate(theta);
        check_likelihood(theta, likelihood)?;
        Ok(LiveSample::new(theta, likelihood))
    }

    fn expect_phase(&self, expected: EnginePhase) -> Result<(), NestError> {
        if self.phase == expected {
            return Ok(());
        }
        Err(NestError::InvalidConfiguration(
            ErrorInfo::new("phase-mismatch", "operation not valid in the current engine phase")
                .with_context("expected", format!("{expected:?}"))
                .with_context("actual", format!("{:?}", self.phase)),
        ))
    }
}

fn check_likelihood(theta: f64, likelihood: f64) -> Result<(), NestError> {
    if likelihood.is_finite() && likelihood >= 0.0 {
        return Ok(());
    }
    Err(NestError::Collaborator(
        ErrorInfo::new(
            "likelihood-out-of-range",
            "likelihood must be finite and non-negative",
        )
        .with_context("theta", theta.to_string())
        .with_context("likelihood", likelihood.to_string()),
    ))
}

/// Runs one nested-sampling run seeded from `config.seed_policy.master_seed`.
pub fn run<L, S>(config: &RunConfig, likelihood: &L, sampler: &S) -> Result<RunResult, NestError>
where
    L: Likelihood + ?Sized,
    S: ConstrainedSampler + ?Sized,
{
    let mut rng = RngHandle::from_seed(config.seed_policy.master_seed);
    run_with_rng(config, likelihood, sampler, &mut rng)
}

/// Runs one nested-sampling run drawing all randomness from `rng`.
pub fn run_with_rng<L, S>(
    config: &RunConfig,
    likelihood: &L,
    sampler: &S,
    rng: &mut RngHandle,
) -> Result<RunResult, NestError>
where
    L: Likelihood + ?Sized,
    S: ConstrainedSampler + ?Sized,
{
    let mut engine = NestedSampler::new(config, likelihood, sampler)?;
    engine.initialize(rng)?;
    while engine.step(rng)? == StepOutcome::Continue {}
    engine.finish()
}
