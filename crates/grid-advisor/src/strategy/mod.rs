//! Decision Engines - Grid Trading
//!
//! Volatility estimation and grid bound derivation.

mod grid;
mod volatility;

pub use grid::{BoundsRequest, GridBoundsCalculator, MIN_HISTORY_POINTS};
pub use volatility::{TRADING_DAYS_PER_YEAR, VolatilityEstimator, regime_for};
