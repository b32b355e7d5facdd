//! Result rendering for table, JSON and CSV output.

use lookback_pricing::{OptionKind, ValuationResult};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// One priced contract with its inputs
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Option kind
    pub kind: OptionKind,
    /// Spot price
    pub spot: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub volatility: f64,
    /// Maturity in years
    pub maturity: f64,
    /// Number of paths
    pub n_paths: usize,
    /// Number of steps
    pub n_steps: usize,
    /// Seed of the draw buffer
    pub seed: u64,
    /// Price and Greeks
    pub result: ValuationResult,
    /// Standard error of the price
    pub std_error: f64,
}

/// Mean and dispersion of one output across seeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Smallest observation
    pub min: f64,
    /// Largest observation
    pub max: f64,
}

impl Summary {
    /// Summarises `values`; empty input gives all zeros
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if values.len() > 1 {
            (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        } else {
            0.0
        };
        Self {
            mean,
            std_dev,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Repeated valuations across consecutive seeds
#[derive(Debug, Clone, Serialize)]
pub struct ConvergenceReport {
    /// Option kind
    pub kind: OptionKind,
    /// Number of runs
    pub runs: usize,
    /// Seed of the first run
    pub first_seed: u64,
    /// Paths per run
    pub n_paths: usize,
    /// Price across runs
    pub price: Summary,
    /// Delta across runs
    pub delta: Summary,
    /// Vega across runs
    pub vega: Summary,
    /// Mean per-run standard error of the price
    pub mean_std_error: f64,
}

/// Renders a price report
pub fn render_price(report: &PriceReport, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Csv => {
            let labels = ValuationResult::LABELS.join(",");
            let values: Vec<String> = report
                .result
                .to_array()
                .iter()
                .map(|v| v.to_string())
                .collect();
            format!(
                "kind,spot,rate,volatility,maturity,n_paths,n_steps,seed,{},std_error\n{},{},{},{},{},{},{},{},{},{}",
                labels,
                report.kind,
                report.spot,
                report.rate,
                report.volatility,
                report.maturity,
                report.n_paths,
                report.n_steps,
                report.seed,
                values.join(","),
                report.std_error
            )
        }
        OutputFormat::Table => {
            let mut lines = vec![
                format!(
                    "Floating-strike lookback {} | S0={} r={} sigma={} T={} | {} paths x {} steps, seed {}",
                    report.kind,
                    report.spot,
                    report.rate,
                    report.volatility,
                    report.maturity,
                    report.n_paths,
                    report.n_steps,
                    report.seed
                ),
                "┌────────────┬────────────────────┐".to_string(),
                "│ Output     │ Value              │".to_string(),
                "├────────────┼────────────────────┤".to_string(),
            ];
            for (label, value) in report.result.labelled() {
                lines.push(format!("│ {:<10} │ {:>18.6} │", label, value));
            }
            lines.push(format!("│ {:<10} │ {:>18.6} │", "std_error", report.std_error));
            lines.push("└────────────┴────────────────────┘".to_string());
            lines.join("\n")
        }
    };
    Ok(text)
}

/// Renders a convergence report
pub fn render_convergence(report: &ConvergenceReport, format: OutputFormat) -> Result<String> {
    let rows = [
        ("price", report.price),
        ("delta", report.delta),
        ("vega", report.vega),
    ];

    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Csv => {
            let mut lines = vec!["output,mean,std_dev,min,max".to_string()];
            for (label, s) in rows {
                lines.push(format!("{},{},{},{},{}", label, s.mean, s.std_dev, s.min, s.max));
            }
            lines.join("\n")
        }
        OutputFormat::Table => {
            let mut lines = vec![
                format!(
                    "Lookback {} over {} seeds from {} ({} paths each), mean std error {:.6}",
                    report.kind,
                    report.runs,
                    report.first_seed,
                    report.n_paths,
                    report.mean_std_error
                ),
                "┌────────┬────────────┬────────────┬────────────┬────────────┐".to_string(),
                "│ Output │ Mean       │ Std Dev    │ Min        │ Max        │".to_string(),
                "├────────┼────────────┼────────────┼────────────┼────────────┤".to_string(),
            ];
            for (label, s) in rows {
                lines.push(format!(
                    "│ {:<6} │ {:>10.4} │ {:>10.4} │ {:>10.4} │ {:>10.4} │",
                    label, s.mean, s.std_dev, s.min, s.max
                ));
            }
            lines.push(
                "└────────┴────────────┴────────────┴────────────┴────────────┘".to_string(),
            );
            lines.join("\n")
        }
    };
    Ok(text)
}
