//! Seeded random source shared by one sampling run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Generator threaded through every sampling step of a run.
pub type SampleRng = ChaCha20Rng;

/// Deterministic generator for `seed`.
#[must_use]
pub fn rng_from_seed(seed: u64) -> SampleRng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Fresh seed drawn from the thread-local entropy source.
#[must_use]
pub fn entropy_seed() -> u64 {
    rand::thread_rng().r#gen()
}

/// Use `seed` when given, otherwise draw one; returns the seed actually used
/// so the run can be replayed.
#[must_use]
pub fn resolve_seed(seed: Option<u64>) -> (u64, SampleRng) {
    let seed = seed.unwrap_or_else(entropy_seed);
    (seed, rng_from_seed(seed))
}
