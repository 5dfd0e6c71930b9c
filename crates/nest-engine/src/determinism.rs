use nest_core::{derive_substream_seed, RngHandle};

/// Derives the deterministic seed used for run `run_index` of a batch.
pub fn run_seed(master_seed: u64, run_index: usize) -> u64 {
    derive_substream_seed(master_seed, run_index as u64)
}

/// RNG handle for run `run_index` of a batch.
pub fn run_rng(master_seed: u64, run_index: usize) -> RngHandle {
    RngHandle::for_substream(master_seed, run_index as u64)
}
