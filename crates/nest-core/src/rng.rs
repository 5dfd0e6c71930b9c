//! Deterministic RNG wrapper and seed-derivation helpers.

use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Deterministic RNG handle threaded through every nested-sampling run.
///
/// The handle is a thin wrapper around `StdRng` that documents the seeding
/// policy used throughout the project. A master `seed: u64` must be provided by
/// the caller; there is no ambient global generator. Substreams are derived by
/// hashing `(master_seed, substream_id)` with SipHash-1-3 configured with fixed
/// zero keys. This rule is stable across platforms and must be used whenever
/// independent runs need their own reproducible streams.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the handle for substream `substream` of `master_seed`.
    pub fn for_substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }

    /// Draws a value uniformly from the open interval `(0, 1)`.
    pub fn uniform_open01(&mut self) -> f64 {
        self.rng.sample(Open01)
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
