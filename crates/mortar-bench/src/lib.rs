//! Benchmark workloads for the mortar allocator.
//!
//! Provides deterministic allocation-size streams and a fragmented-arena
//! fixture so the criterion benches measure steady-state behaviour rather
//! than a pristine empty region.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `n` allocation sizes in `[min, max)`, deterministic per seed.
pub fn churn_sizes(seed: u64, n: usize, min: usize, max: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| min + (rng.next_u64() as usize) % (max - min))
        .collect()
}

/// Backing storage plus a live-pointer script for a fragmentation run.
///
/// `holes` is the number of blocks the setup phase should free to pin
/// gaps open before measurement starts; see the alloc_ops bench.
pub struct ChurnPlan {
    /// Sizes for the setup allocations.
    pub setup_sizes: Vec<usize>,
    /// Indices (into the setup allocations) to free, every other one.
    pub holes: Vec<usize>,
    /// Sizes for the measured allocations.
    pub probe_sizes: Vec<usize>,
}

/// Build a churn plan: `blocks` setup allocations, every other one freed,
/// then `probes` measured requests small enough to land in the holes.
pub fn churn_plan(seed: u64, blocks: usize, probes: usize) -> ChurnPlan {
    ChurnPlan {
        setup_sizes: churn_sizes(seed, blocks, 64, 256),
        holes: (0..blocks).step_by(2).collect(),
        probe_sizes: churn_sizes(seed.wrapping_add(1), probes, 16, 64),
    }
}
