//! Greeks by finite differences on common random numbers.
//!
//! - [`GreekBumpSizes`]: resolved bump sizes (caller overrides or defaults)
//! - [`Repricer`]: re-prices one contract against a shared draw buffer
//! - [`GreekEstimator`]: base plus eight bumped valuations, combined into a
//!   [`ValuationResult`]
//!
//! ```rust
//! use lookback_pricing::greeks::{estimate_all, BumpOverrides};
//! use lookback_pricing::mc::SimulationParameters;
//! use lookback_pricing::path_dependent::OptionKind;
//!
//! let params = SimulationParameters {
//!     kind: OptionKind::Put,
//!     n_paths: 1_000,
//!     n_steps: 25,
//!     ..Default::default()
//! };
//! let result = estimate_all(&params, 7, &BumpOverrides::default()).unwrap();
//! assert!(result.price >= 0.0);
//! ```

mod bumps;
mod estimator;
mod result;

pub use bumps::{
    BumpOverrides, GreekBumpSizes, BUMP_FLOOR, DEFAULT_RATE_BUMP, DEFAULT_RELATIVE_SPOT_BUMP,
    DEFAULT_TIME_BUMP, DEFAULT_VOLATILITY_BUMP,
};
pub use estimator::{estimate_all, GreekEstimator, Repricer};
pub use result::ValuationResult;

#[cfg(test)]
mod tests;
