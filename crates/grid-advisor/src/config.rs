//! Advisor Configuration
//!
//! Named tuning values for the decision engines. The thresholds and caps are
//! product-chosen constants; they live here as plain overridable fields
//! instead of literals scattered through the code paths.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Settings for grid bound calculation
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Deviation multiplier applied to annualized volatility
    pub default_multiplier: f64,

    /// Number of grid levels between the bounds
    pub default_grid_count: u32,

    /// Volatility assumed when history is too short to measure
    pub fallback_volatility: f64,

    /// Lower bound floor as a fraction of the current price
    pub lower_floor_ratio: Decimal,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_multiplier: 2.0,
            default_grid_count: 10,
            fallback_volatility: 0.20,
            lower_floor_ratio: dec!(0.1),
        }
    }
}

/// Thresholds for sector performance classification
#[derive(Clone, Debug)]
pub struct ClassifyConfig {
    /// Both growth figures must exceed this (strictly) for `Strong`
    pub strong_growth_floor: f64,

    /// Revenue growth below this (strictly) means `Weak`
    pub weak_revenue_ceiling: f64,

    /// Profit growth below this (strictly) means `Weak`
    pub weak_profit_floor: f64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            strong_growth_floor: 5.0,
            weak_revenue_ceiling: 0.0,
            weak_profit_floor: -5.0,
        }
    }
}

/// Tier thresholds for the parse quality verdict
#[derive(Clone, Debug)]
pub struct QualityConfig {
    /// `High` requires more sectors than this...
    pub high_min_sectors: usize,

    /// ...and more raw lines than this
    pub high_min_lines: usize,

    /// `Moderate` requires more sectors than this
    pub moderate_min_sectors: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            high_min_sectors: 20,
            high_min_lines: 30,
            moderate_min_sectors: 10,
        }
    }
}

/// Caps for recommendation synthesis
#[derive(Clone, Debug)]
pub struct RecommendConfig {
    /// Maximum buy suggestions emitted
    pub max_buy: usize,

    /// Maximum avoid entries emitted
    pub max_avoid: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_buy: 6,
            max_avoid: 5,
        }
    }
}

/// Aggregate configuration for the whole advisor
#[derive(Clone, Debug, Default)]
pub struct AdvisorConfig {
    pub grid: GridConfig,
    pub classify: ClassifyConfig,
    pub quality: QualityConfig,
    pub recommend: RecommendConfig,
}
