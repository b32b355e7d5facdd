//! Lookback CLI - command line front end for the lookback Monte Carlo pricer
//!
//! # Commands
//!
//! - `lookback price` - Value one floating-strike lookback with Greeks
//! - `lookback convergence --runs <n>` - Repeat the valuation over seeds
//!
//! Simulation defaults come from `lookback.toml` (if present), then
//! `LOOKBACK_*` environment variables, then flags.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::{BumpArgs, MarketArgs, SamplingArgs};
use config::CliConfig;

/// Floating-strike lookback Monte Carlo pricer
#[derive(Parser, Debug)]
#[command(name = "lookback")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "lookback.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price one lookback option with its Greeks
    Price {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        sampling: SamplingArgs,

        #[command(flatten)]
        bumps: BumpArgs,
    },

    /// Repeat the valuation over consecutive seeds and summarise the spread
    Convergence {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        sampling: SamplingArgs,

        #[command(flatten)]
        bumps: BumpArgs,

        /// Number of seeds to run
        #[arg(long, default_value_t = 10)]
        runs: usize,
    },
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            market,
            sampling,
            bumps,
        } => {
            let resolved = commands::resolve(&market, &sampling, &config);
            commands::price::run(&resolved, bumps.overrides())?;
        }
        Commands::Convergence {
            market,
            sampling,
            bumps,
            runs,
        } => {
            let resolved = commands::resolve(&market, &sampling, &config);
            commands::convergence::run(&resolved, bumps.overrides(), runs)?;
        }
    }

    Ok(())
}
