use nest_core::{is_unconstrained, ConstrainedSampler, ErrorInfo, Likelihood, NestError, RngHandle};
use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::function::erf::erf;

/// Unnormalized Gaussian well `L(θ) = exp(-β θ² / 2)` under a uniform prior on `[-1, 1]`.
///
/// The likelihood peaks at `L(0) = 1`, so valid floors lie in `[0, 1]`. The
/// feasible set of a floor `c` is the interval `|θ| < sqrt(-2 ln(c) / β)`,
/// clipped to the prior, which makes exact constrained sampling a single
/// uniform draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianWell {
    beta: f64,
}

impl GaussianWell {
    /// Half-width of the uniform prior.
    pub const PRIOR_HALF_WIDTH: f64 = 1.0;

    /// Creates a well with inverse width `beta`, which must be finite and positive.
    pub fn new(beta: f64) -> Result<Self, NestError> {
        if !beta.is_finite() || beta <= 0.0 {
            return Err(NestError::InvalidConfiguration(
                ErrorInfo::new("beta-not-positive", "beta must be finite and positive")
                    .with_context("beta", beta.to_string()),
            ));
        }
        Ok(Self { beta })
    }

    /// Inverse width of the well.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Closed-form evidence `sqrt(π / (2β)) * erf(sqrt(β / 2))`.
    pub fn exact_evidence(&self) -> f64 {
        (std::f64::consts::PI / (2.0 * self.beta)).sqrt() * erf((self.beta / 2.0).sqrt())
    }

    /// Half-width of the region where `L(θ) > min_likelihood`, clipped to the prior.
    ///
    /// Unconstrained floors and floors at the peak both map to the full prior.
    pub fn feasible_half_width(&self, min_likelihood: f64) -> Result<f64, NestError> {
        if !(0.0..=1.0).contains(&min_likelihood) {
            return Err(NestError::InvalidConfiguration(
                ErrorInfo::new(
                    "constraint-out-of-range",
                    "likelihood floor must lie in [0, 1] for a unit-peak well",
                )
                .with_context("min_likelihood", min_likelihood.to_string()),
            ));
        }
        if is_unconstrained(min_likelihood) || min_likelihood >= 1.0 {
            return Ok(Self::PRIOR_HALF_WIDTH);
        }
        let half_width = (-(2.0 / self.beta) * min_likelihood.ln()).sqrt();
        if half_width > 0.0 {
            Ok(half_width.min(Self::PRIOR_HALF_WIDTH))
        } else {
            Ok(Self::PRIOR_HALF_WIDTH)
        }
    }
}

impl Likelihood for GaussianWell {
    fn evaluate(&self, theta: f64) -> f64 {
        (-self.beta * theta * theta / 2.0).exp()
    }
}

impl ConstrainedSampler for GaussianWell {
    fn sample(&self, min_likelihood: f64, rng: &mut RngHandle) -> Result<f64, NestError> {
        let half_width = self.feasible_half_width(min_likelihood)?;
        Ok(rng.gen_range(-half_width..half_width))
    }
}
