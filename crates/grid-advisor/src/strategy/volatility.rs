//! Volatility Estimation
//!
//! Annualized log-return volatility from a closing price series.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::model::{VolatilityProfile, VolatilityRegime};

/// Trading days per year used for annualization
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized volatility above this is Medium regime
const MEDIUM_REGIME_FLOOR: f64 = 0.15;

/// Annualized volatility above this is High regime
const HIGH_REGIME_FLOOR: f64 = 0.30;

/// Regime bucket for an annualized volatility figure
pub fn regime_for(annualized: f64) -> VolatilityRegime {
    if annualized > HIGH_REGIME_FLOOR {
        VolatilityRegime::High
    } else if annualized > MEDIUM_REGIME_FLOOR {
        VolatilityRegime::Medium
    } else {
        VolatilityRegime::Low
    }
}

/// Log-return volatility estimator
pub struct VolatilityEstimator;

impl VolatilityEstimator {
    /// Estimate annualized volatility from at least two positive closes.
    ///
    /// Variance is the population form - the n-1 correction is deliberately
    /// not applied.
    pub fn estimate(closes: &[Decimal]) -> Option<VolatilityProfile> {
        let prices: Vec<f64> = closes
            .iter()
            .filter_map(Decimal::to_f64)
            .filter(|p| *p > 0.0)
            .collect();

        if prices.len() < 2 {
            return None;
        }

        let returns: Vec<f64> = prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        let annualized = (variance * TRADING_DAYS_PER_YEAR).sqrt();

        Some(VolatilityProfile {
            annualized,
            regime: regime_for(annualized),
            fallback: false,
        })
    }

    /// Flagged profile carrying an assumed volatility instead of a measurement
    pub fn fallback(assumed: f64) -> VolatilityProfile {
        VolatilityProfile {
            annualized: assumed,
            regime: regime_for(assumed),
            fallback: true,
        }
    }
}
