use nest_core::{LiveSample, NestError};

use crate::selector;

/// Fixed-size live population of `(theta, likelihood)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    members: Vec<LiveSample>,
    likelihoods: Vec<f64>,
}

impl Population {
    /// Builds a population from already evaluated samples.
    pub fn new(members: Vec<LiveSample>) -> Self {
        let likelihoods = members.iter().map(|member| member.likelihood).collect();
        Self {
            members,
            likelihoods,
        }
    }

    /// Number of live samples.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the population holds no samples.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Live samples in slot order.
    pub fn members(&self) -> &[LiveSample] {
        &self.members
    }

    /// Likelihoods in slot order.
    pub fn likelihoods(&self) -> &[f64] {
        &self.likelihoods
    }

    /// Largest live likelihood, or zero for an empty population.
    pub fn max_likelihood(&self) -> f64 {
        self.likelihoods.iter().copied().fold(0.0, f64::max)
    }

    /// Index of the unique worst member.
    pub fn worst(&self) -> Result<usize, NestError> {
        selector::select_worst(&self.likelihoods)
    }

    /// Puts `sample` into slot `index`, returning the member it displaces.
    pub fn replace(&mut self, index: usize, sample: LiveSample) -> LiveSample {
        self.likelihoods[index] = sample.likelihood;
        std::mem::replace(&mut self.members[index], sample)
    }

    /// Consumes the population, returning its members.
    pub fn into_members(self) -> Vec<LiveSample> {
        self.members
    }
}
