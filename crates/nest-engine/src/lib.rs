#![deny(missing_docs)]

//! Nested-sampling evidence engine for one-dimensional priors.
//!
//! A run keeps a live population of `n_samples` prior draws, repeatedly
//! discards the worst one, shrinks the enclosed prior volume by a random
//! order-statistic ratio, accumulates `Z += L_i * w_i` and replaces the
//! discarded sample with a draw above its likelihood, until
//! `L_max * X_i < f * Z`.

/// Repeated independent runs and their `ln Z` statistics.
pub mod batch;
/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic per-run seed derivation.
pub mod determinism;
/// Running evidence accumulation and the tail correction.
pub mod evidence;
/// Run loop, lifecycle and public `run` entry points.
pub mod kernel;
/// Fixed-size live population.
pub mod population;
/// Unique-minimum order-statistic selection.
pub mod selector;
/// Termination criterion.
pub mod stopping;
/// Stochastic enclosed-volume estimation.
pub mod volume;

pub use batch::{run_batch, BatchSummary, ExactComparison, RunRecord};
pub use config::{BatchConfig, FailurePolicy, RunConfig, SeedPolicy};
pub use evidence::EvidenceAccumulator;
pub use kernel::{run, run_with_rng, EnginePhase, NestedSampler, RunResult, StepOutcome};
pub use population::Population;
pub use selector::select_worst;
pub use stopping::should_stop;
pub use volume::{VolumeEstimator, VolumeStep};
