//! Finite-difference bump sizes.

/// Lower bound applied to downward bumps of spot, volatility and maturity.
pub const BUMP_FLOOR: f64 = 1e-12;

/// Relative spot bump used when none is supplied, scaled by `max(1, S0)`.
pub const DEFAULT_RELATIVE_SPOT_BUMP: f64 = 1e-4;

/// Absolute rate bump used when none is supplied.
pub const DEFAULT_RATE_BUMP: f64 = 1e-4;

/// Absolute volatility bump used when none is supplied.
pub const DEFAULT_VOLATILITY_BUMP: f64 = 1e-4;

/// Maturity bump used when none is supplied: one calendar day in years.
pub const DEFAULT_TIME_BUMP: f64 = 1.0 / 365.0;

/// Caller-requested bump sizes.
///
/// Any value that is not strictly positive (including NaN) selects the
/// default for that parameter. `Default` requests all defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BumpOverrides {
    /// Spot bump.
    pub spot: f64,
    /// Rate bump.
    pub rate: f64,
    /// Volatility bump.
    pub volatility: f64,
    /// Maturity bump in years.
    pub time: f64,
}

/// Resolved, strictly positive bump sizes.
///
/// # Examples
///
/// ```rust
/// use lookback_pricing::greeks::{BumpOverrides, GreekBumpSizes};
///
/// let bumps = GreekBumpSizes::resolve(&BumpOverrides::default(), 250.0);
/// assert!((bumps.spot - 0.025).abs() < 1e-15);
/// assert_eq!(bumps.time, 1.0 / 365.0);
///
/// let custom = BumpOverrides { rate: 5e-4, ..Default::default() };
/// assert_eq!(GreekBumpSizes::resolve(&custom, 100.0).rate, 5e-4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreekBumpSizes {
    /// Spot bump.
    pub spot: f64,
    /// Rate bump.
    pub rate: f64,
    /// Volatility bump.
    pub volatility: f64,
    /// Maturity bump in years.
    pub time: f64,
}

impl GreekBumpSizes {
    /// Resolves overrides against the defaults for a given spot.
    pub fn resolve(overrides: &BumpOverrides, spot: f64) -> Self {
        Self {
            spot: or_default(
                overrides.spot,
                DEFAULT_RELATIVE_SPOT_BUMP * spot.max(1.0),
            ),
            rate: or_default(overrides.rate, DEFAULT_RATE_BUMP),
            volatility: or_default(overrides.volatility, DEFAULT_VOLATILITY_BUMP),
            time: or_default(overrides.time, DEFAULT_TIME_BUMP),
        }
    }
}

#[inline]
fn or_default(requested: f64, default: f64) -> f64 {
    if requested > 0.0 {
        requested
    } else {
        default
    }
}

/// Downward bump clamped at [`BUMP_FLOOR`].
#[inline]
pub(crate) fn bump_down(value: f64, bump: f64) -> f64 {
    (value - bump).max(BUMP_FLOOR)
}
