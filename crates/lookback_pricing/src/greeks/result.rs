//! Valuation result type.

use crate::error::OUTPUT_LEN;

/// Price and first/second-order sensitivities of one valuation.
///
/// All six values come from a single draw buffer.
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `theta`: ∂V/∂t, calendar time (the negative of ∂V/∂T)
/// - `rho`: ∂V/∂r
/// - `vega`: ∂V/∂σ
///
/// # Examples
///
/// ```rust
/// use lookback_pricing::greeks::ValuationResult;
///
/// let result = ValuationResult {
///     price: 14.6,
///     delta: 0.146,
///     gamma: 0.0,
///     theta: -7.1,
///     rho: 44.0,
///     vega: 66.5,
/// };
/// assert_eq!(result.to_array()[0], 14.6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationResult {
    /// Present value.
    pub price: f64,
    /// Delta: ∂V/∂S.
    pub delta: f64,
    /// Gamma: ∂²V/∂S².
    pub gamma: f64,
    /// Theta: ∂V/∂t.
    pub theta: f64,
    /// Rho: ∂V/∂r.
    pub rho: f64,
    /// Vega: ∂V/∂σ.
    pub vega: f64,
}

impl ValuationResult {
    /// Field labels in output order.
    pub const LABELS: [&'static str; OUTPUT_LEN] =
        ["price", "delta", "gamma", "theta", "rho", "vega"];

    /// Returns `[price, delta, gamma, theta, rho, vega]`.
    #[inline]
    pub fn to_array(&self) -> [f64; OUTPUT_LEN] {
        [
            self.price, self.delta, self.gamma, self.theta, self.rho, self.vega,
        ]
    }

    /// Returns true if every value is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Pairs each label with its value.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::LABELS.into_iter().zip(self.to_array())
    }
}

impl From<ValuationResult> for [f64; OUTPUT_LEN] {
    fn from(result: ValuationResult) -> Self {
        result.to_array()
    }
}
