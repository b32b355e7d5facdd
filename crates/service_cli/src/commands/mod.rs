//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Argument groups shared
//! between commands live here.

pub mod convergence;
pub mod output;
pub mod price;

use clap::Args;
use lookback_pricing::{BumpOverrides, OptionKind, SimulationParameters};

use crate::config::{CliConfig, OutputFormat};

/// Contract and market inputs
#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    /// Spot price S0
    #[arg(short, long, default_value_t = 100.0)]
    pub spot: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value_t = 0.01, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(long, alias = "vol", default_value_t = 0.2)]
    pub volatility: f64,

    /// Time to maturity in years
    #[arg(short = 't', long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Option kind (call, put)
    #[arg(short, long, default_value = "call")]
    pub kind: OptionKind,
}

/// Simulation size and output overrides; unset values come from the config
#[derive(Args, Debug, Clone, Default)]
pub struct SamplingArgs {
    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Number of time steps per path
    #[arg(long)]
    pub steps: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Finite-difference bump overrides; zero or negative means default
#[derive(Args, Debug, Clone, Default)]
pub struct BumpArgs {
    /// Spot bump (default 1e-4 * max(1, S0))
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub bump_spot: f64,

    /// Rate bump (default 1e-4)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub bump_rate: f64,

    /// Volatility bump (default 1e-4)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub bump_vol: f64,

    /// Maturity bump in years (default 1/365)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub bump_time: f64,
}

impl BumpArgs {
    /// Converts to engine bump overrides
    pub fn overrides(&self) -> BumpOverrides {
        BumpOverrides {
            spot: self.bump_spot,
            rate: self.bump_rate,
            volatility: self.bump_vol,
            time: self.bump_time,
        }
    }
}

/// Fully resolved inputs for one command run
#[derive(Debug, Clone, Copy)]
pub struct Resolved {
    /// Simulation parameters
    pub params: SimulationParameters,
    /// Seed for the draw buffer
    pub seed: u64,
    /// Output format
    pub format: OutputFormat,
}

/// Merges flags over configuration defaults
pub fn resolve(market: &MarketArgs, sampling: &SamplingArgs, config: &CliConfig) -> Resolved {
    Resolved {
        params: SimulationParameters {
            spot: market.spot,
            rate: market.rate,
            volatility: market.volatility,
            maturity: market.maturity,
            kind: market.kind,
            n_paths: sampling.paths.unwrap_or(config.n_paths),
            n_steps: sampling.steps.unwrap_or(config.n_steps),
        },
        seed: sampling.seed.unwrap_or(config.seed),
        format: sampling.format.unwrap_or(config.format),
    }
}
