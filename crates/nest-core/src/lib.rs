#![deny(missing_docs)]
#![doc = "Core traits and data types for the nested-sampling engine: collaborator seams, the error taxonomy and deterministic randomness."]

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, NestError};
pub use rng::{derive_substream_seed, RngHandle};

/// Likelihood floor that callers pass to request an unconstrained prior draw.
pub const NO_CONSTRAINT: f64 = 0.0;

/// Floors strictly below this value are treated as "no constraint" by samplers.
///
/// Any positive normal likelihood is a real constraint; zero and subnormal
/// floors select the full prior range.
pub const CONSTRAINT_EPSILON: f64 = f64::MIN_POSITIVE;

/// Returns true when `min_likelihood` requests a draw from the full prior.
pub fn is_unconstrained(min_likelihood: f64) -> bool {
    min_likelihood < CONSTRAINT_EPSILON
}

/// One member of the live population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveSample {
    /// Parameter value drawn from the (constrained) prior.
    pub theta: f64,
    /// Likelihood evaluated at `theta`.
    pub likelihood: f64,
}

impl LiveSample {
    /// Pairs a parameter with its likelihood.
    pub fn new(theta: f64, likelihood: f64) -> Self {
        Self { theta, likelihood }
    }
}

/// Caller supplied likelihood `L(θ)`.
///
/// Implementations must be pure and return a finite, non-negative value.
pub trait Likelihood {
    /// Evaluates the (possibly unnormalized) likelihood at `theta`.
    fn evaluate(&self, theta: f64) -> f64;
}

impl<F> Likelihood for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, theta: f64) -> f64 {
        self(theta)
    }
}

/// Caller supplied sampler drawing from the prior restricted to `L(θ) > floor`.
///
/// Contract:
/// - a floor for which [`is_unconstrained`] holds means "no constraint";
/// - a floor at or above the global likelihood maximum must fall back to the
///   full prior range instead of producing an empty feasible set;
/// - a floor outside the valid range of the model is rejected with
///   [`NestError::InvalidConfiguration`];
/// - every call terminates (no unbounded rejection loops).
pub trait ConstrainedSampler {
    /// Draws one parameter value under the likelihood floor `min_likelihood`.
    fn sample(&self, min_likelihood: f64, rng: &mut RngHandle) -> Result<f64, NestError>;
}

impl<F> ConstrainedSampler for F
where
    F: Fn(f64, &mut RngHandle) -> Result<f64, NestError>,
{
    fn sample(&self, min_likelihood: f64, rng: &mut RngHandle) -> Result<f64, NestError> {
        self(min_likelihood, rng)
    }
}
