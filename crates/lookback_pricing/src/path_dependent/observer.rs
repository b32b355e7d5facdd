//! PathExtrema: streaming running minimum/maximum for lookback payoffs.
//!
//! Statistics are accumulated as prices are observed, so a path never needs
//! to be stored. The initial spot counts as an observation.

use num_traits::Float;

/// Running extrema and terminal value of one simulated path.
///
/// # Example
///
/// ```
/// use lookback_pricing::path_dependent::PathExtrema;
///
/// let mut extrema = PathExtrema::start(100.0);
/// extrema.observe(105.0);
/// extrema.observe(95.0);
/// extrema.observe(101.0);
///
/// assert_eq!(extrema.minimum(), 95.0);
/// assert_eq!(extrema.maximum(), 105.0);
/// assert_eq!(extrema.terminal(), 101.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathExtrema<T: Float> {
    running_min: T,
    running_max: T,
    terminal: T,
}

impl<T: Float> PathExtrema<T> {
    /// Starts a path at `spot`; min, max and terminal all equal `spot`.
    #[inline]
    pub fn start(spot: T) -> Self {
        Self {
            running_min: spot,
            running_max: spot,
            terminal: spot,
        }
    }

    /// Records the next simulated price.
    #[inline]
    pub fn observe(&mut self, price: T) {
        if price < self.running_min {
            self.running_min = price;
        }
        if price > self.running_max {
            self.running_max = price;
        }
        self.terminal = price;
    }

    /// Lowest price seen, including the starting spot.
    #[inline]
    pub fn minimum(&self) -> T {
        self.running_min
    }

    /// Highest price seen, including the starting spot.
    #[inline]
    pub fn maximum(&self) -> T {
        self.running_max
    }

    /// Most recent price.
    #[inline]
    pub fn terminal(&self) -> T {
        self.terminal
    }
}
