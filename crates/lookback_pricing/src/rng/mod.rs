//! # Random Number Generation
//!
//! Seeded standard-normal generation for the Monte Carlo engine.
//!
//! - [`PricerRng`]: `StdRng` wrapper with Ziggurat normal sampling
//! - [`RandomDrawBuffer`]: the immutable draw buffer shared by every
//!   re-pricing of one valuation (common random numbers)
//!
//! ```rust
//! use lookback_pricing::rng::{PricerRng, RandomDrawBuffer};
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let _z = rng.gen_normal();
//!
//! let draws = RandomDrawBuffer::generate(12345, 1_000, 50).unwrap();
//! assert_eq!(draws.as_slice().len(), 50_000);
//! ```

mod draws;
mod prng;

pub(crate) use draws::buffer_len;
pub use draws::RandomDrawBuffer;
pub use prng::PricerRng;
