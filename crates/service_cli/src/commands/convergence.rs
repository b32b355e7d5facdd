//! Convergence command implementation
//!
//! Repeats the valuation over consecutive seeds and reports the spread of
//! price, delta and vega across runs.

use lookback_pricing::{BumpOverrides, GreekEstimator};
use tracing::{debug, info};

use super::output::{render_convergence, ConvergenceReport, Summary};
use super::Resolved;
use crate::error::{CliError, Result};

/// Builds the report for `runs` seeds starting at `resolved.seed`
pub fn evaluate(
    resolved: &Resolved,
    overrides: BumpOverrides,
    runs: usize,
) -> Result<ConvergenceReport> {
    if runs < 2 {
        return Err(CliError::invalid_argument(format!(
            "runs must be at least 2, got {}",
            runs
        )));
    }

    let estimator = GreekEstimator::new(overrides);
    let mut prices = Vec::with_capacity(runs);
    let mut deltas = Vec::with_capacity(runs);
    let mut vegas = Vec::with_capacity(runs);
    let mut std_error_sum = 0.0;

    for offset in 0..runs as u64 {
        let seed = resolved.seed.wrapping_add(offset);
        let (result, estimate) = estimator.estimate_with_stats(&resolved.params, seed)?;
        debug!(seed, price = result.price, std_error = estimate.std_error, "run complete");

        prices.push(result.price);
        deltas.push(result.delta);
        vegas.push(result.vega);
        std_error_sum += estimate.std_error;
    }

    Ok(ConvergenceReport {
        kind: resolved.params.kind,
        runs,
        first_seed: resolved.seed,
        n_paths: resolved.params.n_paths,
        price: Summary::from_values(&prices),
        delta: Summary::from_values(&deltas),
        vega: Summary::from_values(&vegas),
        mean_std_error: std_error_sum / runs as f64,
    })
}

/// Run the convergence command
pub fn run(resolved: &Resolved, overrides: BumpOverrides, runs: usize) -> Result<()> {
    info!(
        "Running {} valuations of {} paths from seed {}",
        runs, resolved.params.n_paths, resolved.seed
    );

    let report = evaluate(resolved, overrides, runs)?;
    println!("{}", render_convergence(&report, resolved.format)?);

    info!("Convergence run complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use lookback_pricing::SimulationParameters;

    fn resolved() -> Resolved {
        Resolved {
            params: SimulationParameters {
                n_paths: 500,
                n_steps: 10,
                ..Default::default()
            },
            seed: 1,
            format: OutputFormat::Table,
        }
    }

    #[test]
    fn test_rejects_single_run() {
        let err = evaluate(&resolved(), BumpOverrides::default(), 1).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_summary_bounds() {
        let report = evaluate(&resolved(), BumpOverrides::default(), 4).unwrap();

        assert_eq!(report.runs, 4);
        assert_eq!(report.first_seed, 1);
        for s in [report.price, report.delta, report.vega] {
            assert!(s.min <= s.mean && s.mean <= s.max);
            assert!(s.std_dev >= 0.0);
        }
        assert!(report.price.std_dev > 0.0);
        assert!(report.mean_std_error > 0.0);
    }

    #[test]
    fn test_first_run_matches_single_valuation() {
        let resolved = resolved();
        let report = evaluate(&resolved, BumpOverrides::default(), 2).unwrap();
        let single = super::super::price::evaluate(&resolved, BumpOverrides::default()).unwrap();

        assert!(report.price.min <= single.result.price);
        assert!(single.result.price <= report.price.max);
    }
}
