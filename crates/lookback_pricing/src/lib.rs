//! # Lookback Pricing Engine
//!
//! Monte Carlo pricing of floating-strike lookback options under geometric
//! Brownian motion, with price sensitivities estimated by central finite
//! differences on common random numbers.
//!
//! ## Architecture
//!
//! ```text
//! GreekEstimator
//! ├── GreekBumpSizes     (caller overrides or defaults)
//! ├── RandomDrawBuffer   (generated once from the seed, read-only)
//! └── Repricer           (kind, paths, steps, &draws)
//!     └── PathPricer     (streaming GBM simulation + lookback payoff)
//! ```
//!
//! A valuation generates one buffer of `n_paths * n_steps` standard normals
//! and prices the base case plus eight bumped cases (S±, r±, σ±, T±) against
//! it. Because every re-pricing sees identical draws, the finite differences
//! carry almost no Monte Carlo noise.
//!
//! ## Usage Example
//!
//! ```rust
//! use lookback_pricing::greeks::GreekEstimator;
//! use lookback_pricing::mc::SimulationParameters;
//! use lookback_pricing::path_dependent::OptionKind;
//!
//! let params = SimulationParameters {
//!     spot: 100.0,
//!     rate: 0.01,
//!     volatility: 0.2,
//!     maturity: 1.0,
//!     kind: OptionKind::Call,
//!     n_paths: 5_000,
//!     n_steps: 50,
//! };
//!
//! let result = GreekEstimator::default().estimate_all(&params, 42).unwrap();
//! println!("Price: {:.4}, Delta: {:.4}, Vega: {:.4}", result.price, result.delta, result.vega);
//! ```
//!
//! ## Embedding
//!
//! The crate also builds as a `cdylib` exporting [`ffi::lookback_mc`], a
//! C-ABI entry point returning integer [`Status`] codes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod ffi;
pub mod greeks;
pub mod mc;
pub mod path_dependent;
pub mod rng;

pub use error::{PricingError, Status};
pub use greeks::{estimate_all, BumpOverrides, GreekBumpSizes, GreekEstimator, ValuationResult};
pub use mc::{PathEstimate, PathPricer, SimulationParameters};
pub use path_dependent::OptionKind;
pub use rng::RandomDrawBuffer;
