//! Price command implementation
//!
//! Values one floating-strike lookback and prints price plus Greeks.

use lookback_pricing::{BumpOverrides, GreekEstimator};
use tracing::info;

use super::output::{render_price, PriceReport};
use super::Resolved;
use crate::error::Result;

/// Builds the report for one valuation
pub fn evaluate(resolved: &Resolved, overrides: BumpOverrides) -> Result<PriceReport> {
    let params = &resolved.params;
    let (result, estimate) =
        GreekEstimator::new(overrides).estimate_with_stats(params, resolved.seed)?;

    Ok(PriceReport {
        kind: params.kind,
        spot: params.spot,
        rate: params.rate,
        volatility: params.volatility,
        maturity: params.maturity,
        n_paths: params.n_paths,
        n_steps: params.n_steps,
        seed: resolved.seed,
        result,
        std_error: estimate.std_error,
    })
}

/// Run the price command
pub fn run(resolved: &Resolved, overrides: BumpOverrides) -> Result<()> {
    info!("Starting pricing...");
    info!("  Kind: {}", resolved.params.kind);
    info!(
        "  Market: S0={} r={} sigma={} T={}",
        resolved.params.spot,
        resolved.params.rate,
        resolved.params.volatility,
        resolved.params.maturity
    );
    info!(
        "  Monte Carlo: {} paths x {} steps, seed {}",
        resolved.params.n_paths, resolved.params.n_steps, resolved.seed
    );

    let report = evaluate(resolved, overrides)?;
    println!("{}", render_price(&report, resolved.format)?);

    info!("Pricing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use lookback_pricing::{OptionKind, SimulationParameters};

    fn resolved(n_paths: usize) -> Resolved {
        Resolved {
            params: SimulationParameters {
                n_paths,
                n_steps: 20,
                ..Default::default()
            },
            seed: 7,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_evaluate_matches_engine() {
        let resolved = resolved(2_000);
        let report = evaluate(&resolved, BumpOverrides::default()).unwrap();
        let direct = lookback_pricing::estimate_all(&resolved.params, 7, &BumpOverrides::default())
            .unwrap();

        assert_eq!(report.result, direct);
        assert_eq!(report.kind, OptionKind::Call);
        assert_eq!(report.seed, 7);
        assert!(report.std_error > 0.0);
    }

    #[test]
    fn test_evaluate_rejects_bad_market() {
        let mut resolved = resolved(100);
        resolved.params.volatility = -0.1;
        let err = evaluate(&resolved, BumpOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::Pricing(_)));
    }
}
