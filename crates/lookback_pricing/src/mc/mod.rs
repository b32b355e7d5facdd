//! Monte Carlo path pricing.
//!
//! # Architecture
//!
//! ```text
//! PathPricer
//! ├── SimulationParameters  (spot, rate, vol, maturity, kind, paths, steps)
//! ├── RandomDrawBuffer      (borrowed, read-only)
//! └── PathExtrema           (per-path running min/max)
//! ```
//!
//! The pricer never owns randomness. Callers generate a
//! [`RandomDrawBuffer`](crate::rng::RandomDrawBuffer) once and may price any
//! number of parameter variations against it.
//!
//! ```rust
//! use lookback_pricing::mc::{PathPricer, SimulationParameters};
//! use lookback_pricing::path_dependent::OptionKind;
//! use lookback_pricing::rng::RandomDrawBuffer;
//!
//! let params = SimulationParameters {
//!     kind: OptionKind::Put,
//!     n_paths: 5_000,
//!     n_steps: 52,
//!     ..Default::default()
//! };
//! let draws = RandomDrawBuffer::generate(7, params.n_paths, params.n_steps).unwrap();
//!
//! let estimate = PathPricer::price_with_stats(&params, &draws);
//! println!("Price: {:.4} +/- {:.4}", estimate.price, estimate.confidence_95());
//! ```

pub mod config;
pub mod pricer;

pub use config::{is_zero_maturity, SimulationParameters, MIN_MATURITY};
pub use pricer::{PathEstimate, PathPricer};
