//! Random number helpers shared by the engine and problem operators.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded generator.
///
/// The same seed always yields the same stream, which is what makes
/// engine runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Bernoulli trial: returns `true` with probability `rate`.
///
/// Rates outside `[0, 1]` saturate (never / always). Useful inside
/// `recombine` or `mutate` to decide whether an operator fires.
pub fn draw<R: Rng>(rate: f64, rng: &mut R) -> bool {
    rng.random::<f64>() < rate
}
