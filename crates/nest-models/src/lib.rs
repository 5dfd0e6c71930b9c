#![deny(missing_docs)]

//! Reference models for the nested-sampling engine.
//!
//! Each model implements both [`nest_core::Likelihood`] and
//! [`nest_core::ConstrainedSampler`] and knows its exact evidence.

/// Gaussian well on a uniform prior.
pub mod gaussian;

pub use gaussian::GaussianWell;
