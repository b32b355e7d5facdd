//! Greek estimation by central differences with common random numbers.
//!
//! One [`RandomDrawBuffer`] is generated per valuation and every re-pricing
//! (base, S±, r±, σ±, T±) walks exactly the same draws. Only one market input
//! differs between the base case and any bumped case.

use tracing::{debug, trace};

use super::bumps::{bump_down, BumpOverrides, GreekBumpSizes};
use super::result::ValuationResult;
use crate::error::{PricingError, Result, OUTPUT_LEN};
use crate::mc::{is_zero_maturity, PathEstimate, PathPricer, SimulationParameters};
use crate::path_dependent::OptionKind;
use crate::rng::RandomDrawBuffer;

/// Re-prices one contract under varying market inputs.
///
/// Bundles what every re-pricing of a valuation shares: option kind, path
/// and step counts, and a borrow of the draw buffer.
#[derive(Clone, Copy, Debug)]
pub struct Repricer<'a> {
    kind: OptionKind,
    n_paths: usize,
    n_steps: usize,
    draws: &'a RandomDrawBuffer,
}

impl<'a> Repricer<'a> {
    /// Creates a re-pricer for `params`' kind and sampling counts.
    pub fn new(params: &SimulationParameters, draws: &'a RandomDrawBuffer) -> Self {
        Self {
            kind: params.kind,
            n_paths: params.n_paths,
            n_steps: params.n_steps,
            draws,
        }
    }

    /// Prices at the given market inputs; zero maturity prices at `0.0`.
    pub fn reprice(&self, spot: f64, rate: f64, volatility: f64, maturity: f64) -> f64 {
        self.reprice_with_stats(spot, rate, volatility, maturity).price
    }

    /// As [`reprice`](Self::reprice), keeping the standard error.
    pub fn reprice_with_stats(
        &self,
        spot: f64,
        rate: f64,
        volatility: f64,
        maturity: f64,
    ) -> PathEstimate {
        trace!(spot, rate, volatility, maturity, "reprice");
        if is_zero_maturity(maturity) {
            return PathEstimate::default();
        }
        let params = SimulationParameters {
            spot,
            rate,
            volatility,
            maturity,
            kind: self.kind,
            n_paths: self.n_paths,
            n_steps: self.n_steps,
        };
        PathPricer::price_with_stats(&params, self.draws)
    }
}

/// Price and Greeks of a floating-strike lookback.
///
/// # Examples
///
/// ```rust
/// use lookback_pricing::greeks::GreekEstimator;
/// use lookback_pricing::mc::SimulationParameters;
///
/// let params = SimulationParameters {
///     n_paths: 2_000,
///     n_steps: 50,
///     ..Default::default()
/// };
///
/// let result = GreekEstimator::default().estimate_all(&params, 42).unwrap();
/// assert!(result.price > 0.0);
/// assert!(result.vega > 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GreekEstimator {
    overrides: BumpOverrides,
}

impl GreekEstimator {
    /// Creates an estimator with caller-requested bump sizes.
    pub fn new(overrides: BumpOverrides) -> Self {
        Self { overrides }
    }

    /// Validates, draws once from `seed`, and estimates all six values.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidMarketParameters`] or
    /// [`PricingError::InvalidSamplingParameters`], checked in that order
    /// before any draws are generated.
    pub fn estimate_all(
        &self,
        params: &SimulationParameters,
        seed: u64,
    ) -> Result<ValuationResult> {
        self.estimate_with_stats(params, seed).map(|(result, _)| result)
    }

    /// As [`estimate_all`](Self::estimate_all), also returning the base-case
    /// estimate with its standard error.
    pub fn estimate_with_stats(
        &self,
        params: &SimulationParameters,
        seed: u64,
    ) -> Result<(ValuationResult, PathEstimate)> {
        params.validate()?;
        let bumps = GreekBumpSizes::resolve(&self.overrides, params.spot);
        let draws = RandomDrawBuffer::generate(seed, params.n_paths, params.n_steps)?;

        debug!(
            seed,
            n_paths = params.n_paths,
            n_steps = params.n_steps,
            kind = %params.kind,
            ?bumps,
            "generated shared draw buffer"
        );

        Ok(Self::estimate_with_draws(params, &draws, &bumps))
    }

    /// Validates `out` first, then estimates and writes
    /// `[price, delta, gamma, theta, rho, vega]` into its first six slots.
    ///
    /// On error `out` is left untouched.
    pub fn estimate_into(
        &self,
        params: &SimulationParameters,
        seed: u64,
        out: &mut [f64],
    ) -> Result<()> {
        if out.len() < OUTPUT_LEN {
            return Err(PricingError::InvalidOutputBuffer(format!(
                "capacity {} < {}",
                out.len(),
                OUTPUT_LEN
            )));
        }
        let result = self.estimate_all(params, seed)?;
        out[..OUTPUT_LEN].copy_from_slice(&result.to_array());
        Ok(())
    }

    /// Runs all re-pricings against an existing draw buffer.
    ///
    /// `params` is not validated; callers outside [`estimate_all`] must
    /// ensure spot and volatility are positive.
    ///
    /// # Panics
    ///
    /// Panics if `draws` is too small for `params.n_paths` x
    /// `params.n_steps`, as [`PathPricer::price`] does.
    ///
    /// [`estimate_all`]: Self::estimate_all
    pub fn estimate_with_draws(
        params: &SimulationParameters,
        draws: &RandomDrawBuffer,
        bumps: &GreekBumpSizes,
    ) -> (ValuationResult, PathEstimate) {
        let p = Repricer::new(params, draws);
        let (s, r, v, t) = (
            params.spot,
            params.rate,
            params.volatility,
            params.maturity,
        );

        let base = p.reprice_with_stats(s, r, v, t);
        let price = base.price;

        let price_up_s = p.reprice(s + bumps.spot, r, v, t);
        let price_dn_s = p.reprice(bump_down(s, bumps.spot), r, v, t);
        let delta = (price_up_s - price_dn_s) / (2.0 * bumps.spot);
        let gamma = (price_up_s - 2.0 * price + price_dn_s) / (bumps.spot * bumps.spot);

        let price_up_r = p.reprice(s, r + bumps.rate, v, t);
        let price_dn_r = p.reprice(s, r - bumps.rate, v, t);
        let rho = (price_up_r - price_dn_r) / (2.0 * bumps.rate);

        let price_up_v = p.reprice(s, r, v + bumps.volatility, t);
        let price_dn_v = p.reprice(s, r, bump_down(v, bumps.volatility), t);
        let vega = (price_up_v - price_dn_v) / (2.0 * bumps.volatility);

        // Calendar time runs against time to maturity.
        let price_up_t = p.reprice(s, r, v, t + bumps.time);
        let price_dn_t = p.reprice(s, r, v, bump_down(t, bumps.time));
        let theta = -(price_up_t - price_dn_t) / (2.0 * bumps.time);

        debug!(
            price,
            std_error = base.std_error,
            delta,
            gamma,
            theta,
            rho,
            vega,
            "estimated lookback greeks"
        );

        (
            ValuationResult {
                price,
                delta,
                gamma,
                theta,
                rho,
                vega,
            },
            base,
        )
    }
}

/// Estimates price and Greeks with the given bump overrides.
///
/// Shorthand for `GreekEstimator::new(*bumps).estimate_all(params, seed)`.
pub fn estimate_all(
    params: &SimulationParameters,
    seed: u64,
    bumps: &BumpOverrides,
) -> Result<ValuationResult> {
    GreekEstimator::new(*bumps).estimate_all(params, seed)
}
