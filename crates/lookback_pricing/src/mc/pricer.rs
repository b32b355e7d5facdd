//! Path pricer for floating-strike lookback options under GBM.
//!
//! Paths are simulated in log-space with a fixed time grid:
//!
//! ```text
//! S_{j+1} = S_j * exp((r - σ²/2) dt + σ √dt Z_j)
//! ```
//!
//! Draws are consumed strictly in buffer order across path boundaries, so a
//! given [`RandomDrawBuffer`] always produces the same estimate for the same
//! parameters. Only the running extrema are kept per path.

use super::config::{is_zero_maturity, SimulationParameters};
use crate::path_dependent::PathExtrema;
use crate::rng::RandomDrawBuffer;

/// Discounted Monte Carlo estimate with its standard error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Discounted standard error of the mean.
    pub std_error: f64,
}

impl PathEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Prices a lookback option against a fixed draw buffer.
///
/// # Examples
///
/// ```rust
/// use lookback_pricing::mc::{PathPricer, SimulationParameters};
/// use lookback_pricing::rng::RandomDrawBuffer;
///
/// let params = SimulationParameters {
///     n_paths: 2_000,
///     n_steps: 50,
///     ..Default::default()
/// };
/// let draws = RandomDrawBuffer::generate(42, params.n_paths, params.n_steps).unwrap();
///
/// let price = PathPricer::price(&params, &draws);
/// assert!(price > 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PathPricer;

impl PathPricer {
    /// Discounted expected lookback payoff.
    ///
    /// Returns `0.0` for zero maturity or zero path/step counts.
    ///
    /// # Panics
    ///
    /// Panics if `draws` does not have `params.n_steps` draws per path or
    /// holds fewer than `params.n_paths` paths.
    #[inline]
    pub fn price(params: &SimulationParameters, draws: &RandomDrawBuffer) -> f64 {
        Self::price_with_stats(params, draws).price
    }

    /// Discounted expected payoff together with its standard error.
    ///
    /// # Panics
    ///
    /// As [`price`](Self::price).
    pub fn price_with_stats(
        params: &SimulationParameters,
        draws: &RandomDrawBuffer,
    ) -> PathEstimate {
        let n_paths = params.n_paths;
        let n_steps = params.n_steps;

        if is_zero_maturity(params.maturity) || n_paths == 0 || n_steps == 0 {
            return PathEstimate::default();
        }
        assert_eq!(
            draws.n_steps(),
            n_steps,
            "draw buffer has {} steps per path, expected {}",
            draws.n_steps(),
            n_steps
        );
        assert!(
            draws.n_paths() >= n_paths,
            "draw buffer holds {} paths, expected at least {}",
            draws.n_paths(),
            n_paths
        );

        let dt = params.maturity / n_steps as f64;
        let drift = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
        let vol = params.volatility * dt.sqrt();
        let discount = (-params.rate * params.maturity).exp();

        let mut sum = 0.0;
        let mut sum_sq = 0.0;

        for path in draws.as_slice().chunks_exact(n_steps).take(n_paths) {
            let mut spot = params.spot;
            let mut extrema = PathExtrema::start(spot);

            for &z in path {
                spot *= (drift + vol * z).exp();
                extrema.observe(spot);
            }

            let payoff = params.kind.payoff(&extrema);
            sum += payoff;
            sum_sq += payoff * payoff;
        }

        let n = n_paths as f64;
        let mean = sum / n;
        let std_error = if n_paths > 1 {
            let variance = ((sum_sq - sum * mean) / (n - 1.0)).max(0.0);
            (variance / n).sqrt()
        } else {
            0.0
        };

        PathEstimate {
            price: discount * mean,
            std_error: discount * std_error,
        }
    }
}
