//! C-ABI export for embedding the engine in a host application.
//!
//! ```c
//! int32_t lookback_mc(double s0, double r, double sigma, double t,
//!                     int32_t is_call, int32_t n_paths, int32_t n_steps,
//!                     uint64_t seed,
//!                     double eps_s, double eps_r, double eps_sigma, double eps_t,
//!                     double *out, int32_t out_len);
//! ```
//!
//! On success `out[0..6]` receives price, delta, gamma, theta, rho, vega and
//! `0` is returned. Any other return value is a [`Status`] code and `out` is
//! not written.

use crate::error::{PricingError, Status, OUTPUT_LEN};
use crate::greeks::{BumpOverrides, GreekEstimator};
use crate::mc::SimulationParameters;
use crate::path_dependent::OptionKind;

/// Prices a floating-strike lookback and its Greeks.
///
/// Bump arguments `<= 0` select the defaults.
///
/// # Safety
///
/// If `out` is non-null it must be valid for writes of `out_len` `f64`
/// values. Nothing is read through `out`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn lookback_mc(
    s0: f64,
    r: f64,
    sigma: f64,
    t: f64,
    is_call: i32,
    n_paths: i32,
    n_steps: i32,
    seed: u64,
    eps_s: f64,
    eps_r: f64,
    eps_sigma: f64,
    eps_t: f64,
    out: *mut f64,
    out_len: i32,
) -> i32 {
    if out.is_null() || out_len < OUTPUT_LEN as i32 {
        return Status::InvalidOutputBuffer.code();
    }

    let request = ValuationRequest {
        spot: s0,
        rate: r,
        volatility: sigma,
        maturity: t,
        kind: OptionKind::from_flag(is_call),
        n_paths,
        n_steps,
    };
    let overrides = BumpOverrides {
        spot: eps_s,
        rate: eps_r,
        volatility: eps_sigma,
        time: eps_t,
    };

    match request.estimate(seed, overrides) {
        Ok(values) => {
            // SAFETY: `out` is non-null and the caller guarantees `out_len >= 6`
            // writable slots.
            let out = std::slice::from_raw_parts_mut(out, OUTPUT_LEN);
            out.copy_from_slice(&values);
            Status::Success.code()
        }
        Err(err) => {
            tracing::debug!(%err, "lookback_mc rejected request");
            err.status().code()
        }
    }
}

/// Raw request as received across the boundary, with signed counts.
struct ValuationRequest {
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    kind: OptionKind,
    n_paths: i32,
    n_steps: i32,
}

impl ValuationRequest {
    fn estimate(
        &self,
        seed: u64,
        overrides: BumpOverrides,
    ) -> Result<[f64; OUTPUT_LEN], PricingError> {
        let mut params = SimulationParameters {
            spot: self.spot,
            rate: self.rate,
            volatility: self.volatility,
            maturity: self.maturity,
            kind: self.kind,
            n_paths: 1,
            n_steps: 1,
        };
        // Market inputs are checked before the signed counts are converted.
        params.validate_market()?;
        params.n_paths = positive_count("n_paths", self.n_paths)?;
        params.n_steps = positive_count("n_steps", self.n_steps)?;

        let result = GreekEstimator::new(overrides).estimate_all(&params, seed)?;
        Ok(result.to_array())
    }
}

fn positive_count(name: &'static str, value: i32) -> Result<usize, PricingError> {
    if value <= 0 {
        return Err(PricingError::sampling(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    usize::try_from(value)
        .map_err(|_| PricingError::sampling(name, format!("does not fit in usize: {}", value)))
}
