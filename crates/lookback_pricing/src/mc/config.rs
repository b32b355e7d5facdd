//! Simulation parameters for a single lookback valuation.
//!
//! [`SimulationParameters`] is a plain value type. Validation is explicit via
//! [`SimulationParameters::validate`] so that the path pricer can still be
//! called with degenerate inputs, which it prices at zero.

use crate::error::{PricingError, Result};
use crate::path_dependent::OptionKind;
use crate::rng::buffer_len;

/// Maturities at or below this value are treated as zero maturity.
///
/// Shared by the path pricer and the Greek re-pricer so both short-circuit
/// identically, including at the `1e-12` floor applied to downward bumps.
pub const MIN_MATURITY: f64 = 1e-12;

/// Returns true if `maturity` counts as zero time to expiry.
#[inline]
pub fn is_zero_maturity(maturity: f64) -> bool {
    maturity <= MIN_MATURITY
}

/// Full parameter set of one valuation.
///
/// # Examples
///
/// ```rust
/// use lookback_pricing::mc::SimulationParameters;
/// use lookback_pricing::path_dependent::OptionKind;
///
/// let params = SimulationParameters {
///     spot: 100.0,
///     rate: 0.01,
///     volatility: 0.2,
///     maturity: 1.0,
///     kind: OptionKind::Call,
///     n_paths: 10_000,
///     n_steps: 100,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Spot price S0, must be positive.
    pub spot: f64,
    /// Continuously compounded risk-free rate, any finite value.
    pub rate: f64,
    /// Annualised volatility, must be positive.
    pub volatility: f64,
    /// Time to maturity in years, must be non-negative.
    pub maturity: f64,
    /// Call or put.
    pub kind: OptionKind,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Number of time steps per path.
    pub n_steps: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.01,
            volatility: 0.2,
            maturity: 1.0,
            kind: OptionKind::Call,
            n_paths: 10_000,
            n_steps: 100,
        }
    }
}

impl SimulationParameters {
    /// Returns a copy with the four market inputs replaced.
    #[inline]
    pub fn with_market(&self, spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
            ..*self
        }
    }

    /// Validates market inputs, then sampling inputs.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidMarketParameters`] if `spot <= 0`,
    ///   `volatility <= 0`, `maturity < 0`, or any market input is not finite
    /// - [`PricingError::InvalidSamplingParameters`] if `n_paths` or
    ///   `n_steps` is zero, or the draw buffer would exceed `isize::MAX` bytes
    pub fn validate(&self) -> Result<()> {
        self.validate_market()?;
        self.validate_sampling()
    }

    /// Validates spot, rate, volatility and maturity.
    pub fn validate_market(&self) -> Result<()> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(PricingError::market(
                "spot",
                format!("must be positive and finite, got {}", self.spot),
            ));
        }
        if !self.volatility.is_finite() || self.volatility <= 0.0 {
            return Err(PricingError::market(
                "volatility",
                format!("must be positive and finite, got {}", self.volatility),
            ));
        }
        if !self.maturity.is_finite() || self.maturity < 0.0 {
            return Err(PricingError::market(
                "maturity",
                format!("must be non-negative and finite, got {}", self.maturity),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::market(
                "rate",
                format!("must be finite, got {}", self.rate),
            ));
        }
        Ok(())
    }

    /// Validates path and step counts.
    pub fn validate_sampling(&self) -> Result<()> {
        buffer_len(self.n_paths, self.n_steps).map(|_| ())
    }
}
