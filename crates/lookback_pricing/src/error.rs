//! Error types for the lookback pricing engine.
//!
//! Every failure is detected before any simulation work starts. The variants
//! are listed in the order they are checked: output buffer, then market
//! inputs, then sampling inputs.

use thiserror::Error;

/// Minimum number of slots an output buffer must provide.
pub const OUTPUT_LEN: usize = 6;

/// Validation failure for a valuation request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Output buffer missing or shorter than [`OUTPUT_LEN`].
    #[error("Invalid output buffer: {0}")]
    InvalidOutputBuffer(String),

    /// Spot, volatility, maturity or rate outside their valid domain.
    #[error("Invalid market parameter '{name}': {value}")]
    InvalidMarketParameters {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Path or step count unusable for building the draw buffer.
    #[error("Invalid sampling parameter '{name}': {value}")]
    InvalidSamplingParameters {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl PricingError {
    pub(crate) fn market(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidMarketParameters {
            name,
            value: value.into(),
        }
    }

    pub(crate) fn sampling(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidSamplingParameters {
            name,
            value: value.into(),
        }
    }

    /// Returns the numeric status code reported across the C boundary.
    #[inline]
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidOutputBuffer(_) => Status::InvalidOutputBuffer,
            Self::InvalidMarketParameters { .. } => Status::InvalidMarketParameters,
            Self::InvalidSamplingParameters { .. } => Status::InvalidSamplingParameters,
        }
    }
}

/// Status codes returned by [`lookback_mc`](crate::ffi::lookback_mc).
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// All six outputs were written.
    Success = 0,
    /// Output pointer null or capacity below six.
    InvalidOutputBuffer = -1,
    /// `S0 <= 0`, `sigma <= 0`, `T < 0` or a non-finite market input.
    InvalidMarketParameters = -2,
    /// `n_paths <= 0` or `n_steps <= 0`.
    InvalidSamplingParameters = -3,
}

impl Status {
    /// Returns the raw code.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl<T> From<&std::result::Result<T, PricingError>> for Status {
    fn from(result: &std::result::Result<T, PricingError>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(err) => err.status(),
        }
    }
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, PricingError>;
