//! Floating-strike lookback payoffs.
//!
//! - **Call**: max(S_T - S_min, 0)
//! - **Put**: max(S_max - S_T, 0)
//!
//! Both are non-negative by construction since the running extrema include
//! the terminal price.

use super::PathExtrema;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Option kind of a floating-strike lookback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Pays the terminal price over the realised minimum.
    Call,
    /// Pays the realised maximum over the terminal price.
    Put,
}

impl OptionKind {
    /// Maps the C-style flag: nonzero is a call.
    #[inline]
    pub fn from_flag(is_call: i32) -> Self {
        if is_call != 0 {
            Self::Call
        } else {
            Self::Put
        }
    }

    /// Returns true for [`OptionKind::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call)
    }

    /// Payoff of one path given its extrema.
    #[inline]
    pub fn payoff<T: Float>(&self, extrema: &PathExtrema<T>) -> T {
        let intrinsic = match self {
            Self::Call => extrema.terminal() - extrema.minimum(),
            Self::Put => extrema.maximum() - extrema.terminal(),
        };
        intrinsic.max(T::zero())
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(Self::Call),
            "put" | "p" => Ok(Self::Put),
            other => Err(format!("Unknown option kind: {}. Supported: call, put", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn extrema(spot: f64, prices: &[f64]) -> PathExtrema<f64> {
        let mut e = PathExtrema::start(spot);
        for &p in prices {
            e.observe(p);
        }
        e
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(OptionKind::from_flag(1), OptionKind::Call);
        assert_eq!(OptionKind::from_flag(-7), OptionKind::Call);
        assert_eq!(OptionKind::from_flag(0), OptionKind::Put);
    }

    #[test]
    fn test_call_pays_over_minimum() {
        let e = extrema(100.0, &[90.0, 95.0, 104.0]);
        assert_relative_eq!(OptionKind::Call.payoff(&e), 14.0, epsilon = 1e-12);
    }

    #[test]
    fn test_put_pays_under_maximum() {
        let e = extrema(100.0, &[115.0, 95.0, 104.0]);
        assert_relative_eq!(OptionKind::Put.payoff(&e), 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_terminal_at_extremum_pays_zero() {
        let falling = extrema(100.0, &[95.0, 90.0]);
        assert_eq!(OptionKind::Call.payoff(&falling), 0.0);

        let rising = extrema(100.0, &[105.0, 110.0]);
        assert_eq!(OptionKind::Put.payoff(&rising), 0.0);
    }

    #[test]
    fn test_unobserved_path_pays_zero() {
        let e = PathExtrema::start(100.0);
        assert_eq!(OptionKind::Call.payoff(&e), 0.0);
        assert_eq!(OptionKind::Put.payoff(&e), 0.0);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("p".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert!("straddle".parse::<OptionKind>().is_err());
        assert_eq!(OptionKind::Put.to_string(), "put");
        assert!(OptionKind::Call.is_call());
        assert!(!OptionKind::Put.is_call());
    }
}
