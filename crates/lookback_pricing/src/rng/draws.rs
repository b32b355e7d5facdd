//! Shared standard-normal draw buffer.
//!
//! A [`RandomDrawBuffer`] is generated once per valuation and then only ever
//! borrowed immutably. Every re-pricing of a Greek estimate walks the same
//! draws, which is what keeps the finite differences free of sampling noise.

use super::PricerRng;
use crate::error::{PricingError, Result};

const MAX_DRAWS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Immutable `n_paths x n_steps` buffer of standard normal draws.
///
/// Storage is row-major (path-major, step-minor), matching the order in
/// which [`PathPricer`](crate::mc::PathPricer) consumes draws.
///
/// # Examples
///
/// ```rust
/// use lookback_pricing::rng::RandomDrawBuffer;
///
/// let draws = RandomDrawBuffer::generate(42, 100, 10).unwrap();
/// assert_eq!(draws.len(), 1_000);
/// assert_eq!(draws.path(3).len(), 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDrawBuffer {
    values: Vec<f64>,
    n_paths: usize,
    n_steps: usize,
    seed: u64,
}

impl RandomDrawBuffer {
    /// Generates `n_paths * n_steps` draws from a generator seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidSamplingParameters`] if either count is
    /// zero, the buffer size is not addressable, or the allocation fails.
    pub fn generate(seed: u64, n_paths: usize, n_steps: usize) -> Result<Self> {
        let len = buffer_len(n_paths, n_steps)?;

        let mut values = Vec::new();
        values.try_reserve_exact(len).map_err(|e| {
            PricingError::sampling(
                "n_paths * n_steps",
                format!("cannot allocate {} x {} draws: {}", n_paths, n_steps, e),
            )
        })?;
        values.resize(len, 0.0);
        PricerRng::from_seed(seed).fill_normal(&mut values);

        Ok(Self {
            values,
            n_paths,
            n_steps,
            seed,
        })
    }

    /// Wraps caller-supplied draws.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidSamplingParameters`] if the counts are
    /// invalid or `values.len() != n_paths * n_steps`.
    pub fn from_values(values: Vec<f64>, n_paths: usize, n_steps: usize) -> Result<Self> {
        let len = buffer_len(n_paths, n_steps)?;
        if values.len() != len {
            return Err(PricingError::sampling(
                "draws",
                format!(
                    "expected {} values for {} paths x {} steps, got {}",
                    len,
                    n_paths,
                    n_steps,
                    values.len()
                ),
            ));
        }

        Ok(Self {
            values,
            n_paths,
            n_steps,
            seed: 0,
        })
    }

    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Seed the buffer was generated from (zero for wrapped values).
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Total number of draws.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the buffer holds no draws.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All draws in consumption order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Draws for path `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_paths`.
    #[inline]
    pub fn path(&self, index: usize) -> &[f64] {
        let start = index * self.n_steps;
        &self.values[start..start + self.n_steps]
    }
}

/// Number of draws for `n_paths x n_steps`, checked against the largest
/// allocation a `Vec<f64>` can hold.
pub(crate) fn buffer_len(n_paths: usize, n_steps: usize) -> Result<usize> {
    if n_paths == 0 {
        return Err(PricingError::sampling("n_paths", "must be positive, got 0"));
    }
    if n_steps == 0 {
        return Err(PricingError::sampling("n_steps", "must be positive, got 0"));
    }
    n_paths
        .checked_mul(n_steps)
        .filter(|&len| len <= MAX_DRAWS)
        .ok_or_else(|| {
            PricingError::sampling(
                "n_paths * n_steps",
                format!("{} x {} overflows the draw buffer size", n_paths, n_steps),
            )
        })
}
