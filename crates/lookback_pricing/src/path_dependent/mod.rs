//! Path-dependent payoff support.
//!
//! Lookback payoffs only need the running extrema and the terminal price of
//! a path, so they are computed from a streaming [`PathExtrema`] rather than
//! a stored path.

mod lookback;
mod observer;

pub use lookback::OptionKind;
pub use observer::PathExtrema;
