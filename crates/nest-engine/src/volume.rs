use nest_core::{ErrorInfo, NestError, RngHandle};
use serde::{Deserialize, Serialize};

/// Consecutive draws allowed to round back onto the previous volume.
const MAX_REDRAWS: usize = 64;

/// Result of advancing the volume sequence by one discard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeStep {
    /// New enclosed volume `X_i`.
    pub volume: f64,
    /// Decrement `w_i = X_{i-1} - X_i`.
    pub decrement: f64,
    /// Shrinkage ratio `t` that produced `X_i`.
    pub shrinkage: f64,
}

/// Stochastic estimate of the enclosed prior volume `X_i`.
///
/// Each advance multiplies the previous volume by `t = z^(1/n)` with
/// `z ~ U(0, 1)`, the distribution of the largest of `n` uniform fractions.
#[derive(Debug, Clone)]
pub struct VolumeEstimator {
    n_samples: usize,
    sequence: Vec<f64>,
}

impl VolumeEstimator {
    /// Starts a sequence at the full prior volume `X_0 = 1`.
    pub fn new(n_samples: usize) -> Self {
        Self {
            n_samples,
            sequence: vec![1.0],
        }
    }

    /// Most recent volume estimate.
    pub fn current(&self) -> f64 {
        // sequence always holds X_0
        self.sequence[self.sequence.len() - 1]
    }

    /// Every volume recorded so far, starting with `X_0`.
    pub fn sequence(&self) -> &[f64] {
        &self.sequence
    }

    /// Consumes the estimator and returns the recorded volumes.
    pub fn into_sequence(self) -> Vec<f64> {
        self.sequence
    }

    /// Draws a shrinkage ratio and appends `X_i = X_{i-1} * t`.
    pub fn advance(&mut self, rng: &mut RngHandle) -> Result<VolumeStep, NestError> {
        let step = self.propose(rng)?;
        self.commit(step);
        Ok(step)
    }

    /// Appends a step previously returned by [`VolumeEstimator::propose`].
    pub fn commit(&mut self, step: VolumeStep) {
        self.sequence.push(step.volume);
    }

    /// Draws the next volume without recording it.
    pub fn propose(&self, rng: &mut RngHandle) -> Result<VolumeStep, NestError> {
        let previous = self.current();
        let exponent = 1.0 / self.n_samples as f64;
        for _ in 0..MAX_REDRAWS {
            let shrinkage = rng.uniform_open01().powf(exponent);
            let volume = previous * shrinkage;
            if volume <= 0.0 {
                break;
            }
            // t rounds to 1 for z within an ulp of 1; redraw to keep X strictly decreasing.
            if volume < previous {
                return Ok(VolumeStep {
                    volume,
                    decrement: previous - volume,
                    shrinkage,
                });
            }
        }
        Err(NestError::Numeric(
            ErrorInfo::new(
                "volume-underflow",
                "enclosed prior volume can no longer shrink in floating point",
            )
            .with_context("previous_volume", previous.to_string())
            .with_context("step", self.sequence.len().to_string())
            .with_hint("raise the stopping tolerance or check that the likelihood is bounded"),
        ))
    }
}
