//! Simulation random source.
//!
//! Every scheduler takes its randomness as an argument (`&mut impl Rng`)
//! rather than reaching for a thread-local generator, so the driver decides
//! where randomness comes from:
//!
//! - production runs use [`SimRng::from_entropy`] and are non-deterministic;
//! - tests and replays use [`SimRng::new`] with a fixed seed and get
//!   identical growth and traffic outcomes every run.
//!
//! `SimRng` implements [`RngCore`], so the whole `rand::Rng` extension API
//! (`gen_range`, `gen_bool`, `SliceRandom::choose`, …) works on it directly.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG shared by the growth and traffic schedulers.
///
/// Used only from the single-threaded frame loop.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic generator: the same seed always produces the same city.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy-backed otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => SimRng::new(s),
            None    => SimRng::from_entropy(),
        }
    }

    /// Derive an independent child generator, e.g. one per subsystem, so that
    /// adding draws in one subsystem does not perturb another's sequence.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RngCore for SimRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
