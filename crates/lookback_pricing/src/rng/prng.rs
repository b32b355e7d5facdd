//! Seeded pseudo-random number generator for the draw buffer.
//!
//! [`PricerRng`] wraps `rand::rngs::StdRng` and samples standard normals via
//! `rand_distr::StandardNormal` (Ziggurat). The same seed always yields the
//! same sequence on a given `rand` release.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Seeded PRNG producing standard normal variates.
///
/// # Examples
///
/// ```rust
/// use lookback_pricing::rng::PricerRng;
///
/// let mut rng1 = PricerRng::from_seed(42);
/// let mut rng2 = PricerRng::from_seed(42);
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// ```
pub struct PricerRng {
    inner: StdRng,
}

impl PricerRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a single standard normal variate.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with standard normal variates, in order.
    ///
    /// Zero allocation; an empty buffer is a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
