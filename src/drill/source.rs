//! Random number sources for question generation
//!
//! Question generation only ever needs "a uniform integer in a closed range",
//! so that is the whole seam. Production code uses [`RandSource`]; tests plug
//! in a scripted source to assert exact operands.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer generator over a closed range
pub trait NumberSource {
    /// Draw an integer in `min..=max`
    fn next_in(&mut self, min: i64, max: i64) -> i64;
}

/// [`NumberSource`] backed by the `rand` standard generator
#[derive(Debug, Clone)]
pub struct RandSource {
    rng: StdRng,
}

impl RandSource {
    /// OS-seeded source
    pub fn new() -> Self {
        RandSource {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source; the same seed yields the same question sequence
    pub fn seeded(seed: u64) -> Self {
        RandSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberSource for RandSource {
    fn next_in(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }
}
