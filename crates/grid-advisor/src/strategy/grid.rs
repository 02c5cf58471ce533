//! Grid Bound Calculation
//!
//! Derives upper/lower grid trading bounds from measured volatility, with a
//! flagged fallback when history is too short to estimate.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::GridConfig;
use crate::error::{AdvisorError, Result};
use crate::model::{BoundsOutcome, GridBounds, PriceSeries, SymbolBounds};
use crate::provider::{HistoryPeriod, MarketDataProvider};
use crate::strategy::volatility::VolatilityEstimator;

/// Minimum history points for a statistical volatility estimate
pub const MIN_HISTORY_POINTS: usize = 5;

/// One bound calculation request
#[derive(Clone, Debug)]
pub struct BoundsRequest {
    /// Instrument symbol
    pub symbol: String,

    /// Requested lookback window, quantized to a provider granularity
    pub lookback_days: u32,

    /// Volatility multiplier override
    pub multiplier: Option<f64>,

    /// Grid level count override
    pub grid_count: Option<u32>,

    /// Capital assigned to the grid
    pub investment_amount: Decimal,

    /// Last-resort current price when nothing is fetchable
    pub fallback_price: Option<Decimal>,
}

impl BoundsRequest {
    pub fn new(symbol: impl Into<String>, lookback_days: u32, investment_amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            lookback_days,
            multiplier: None,
            grid_count: None,
            investment_amount,
            fallback_price: None,
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    pub fn with_grid_count(mut self, grid_count: u32) -> Self {
        self.grid_count = Some(grid_count);
        self
    }

    pub fn with_fallback_price(mut self, price: Decimal) -> Self {
        self.fallback_price = Some(price);
        self
    }
}

/// Volatility-adaptive grid bound calculator
pub struct GridBoundsCalculator {
    provider: Arc<dyn MarketDataProvider>,
    config: GridConfig,
}

impl GridBoundsCalculator {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_config(provider, GridConfig::default())
    }

    pub fn with_config(provider: Arc<dyn MarketDataProvider>, config: GridConfig) -> Self {
        Self { provider, config }
    }

    /// Compute grid bounds for one symbol.
    ///
    /// Short or missing history degrades to the configured fallback
    /// volatility; only a request with no obtainable price at all fails.
    pub async fn calculate(&self, request: &BoundsRequest) -> Result<BoundsOutcome> {
        let multiplier = request.multiplier.unwrap_or(self.config.default_multiplier);
        let grid_count = request.grid_count.unwrap_or(self.config.default_grid_count);

        if grid_count == 0 {
            return Err(AdvisorError::InvalidParameter(
                "grid count must be positive".into(),
            ));
        }
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(AdvisorError::InvalidParameter(
                "volatility multiplier must be positive".into(),
            ));
        }

        let period = HistoryPeriod::from_lookback_days(request.lookback_days);
        let series = match self.provider.price_history(&request.symbol, period).await {
            Ok(series) => series,
            Err(e) => {
                tracing::warn!(symbol = %request.symbol, error = %e, "price history fetch failed");
                PriceSeries::new(&request.symbol, request.lookback_days)
            }
        };

        let current_price = series
            .best_price()
            .or(request.fallback_price)
            .ok_or_else(|| AdvisorError::DataUnavailable(request.symbol.clone()))?;

        if current_price <= Decimal::ZERO {
            return Err(AdvisorError::InvalidParameter(format!(
                "non-positive current price for {}",
                request.symbol
            )));
        }

        let profile = if series.len() >= MIN_HISTORY_POINTS {
            match VolatilityEstimator::estimate(&series.closes()) {
                Some(profile) => profile,
                None => {
                    tracing::warn!(symbol = %request.symbol, "series not estimable, assuming default volatility");
                    VolatilityEstimator::fallback(self.config.fallback_volatility)
                }
            }
        } else {
            tracing::debug!(
                symbol = %request.symbol,
                points = series.len(),
                "insufficient history, assuming default volatility"
            );
            VolatilityEstimator::fallback(self.config.fallback_volatility)
        };

        let deviation = current_price
            * Decimal::from_f64_retain(profile.annualized * multiplier).unwrap_or_default();
        let upper = current_price + deviation;
        let floor = current_price * self.config.lower_floor_ratio;
        let lower = (current_price - deviation).max(floor);
        let spacing = (upper - lower) / Decimal::from(grid_count);

        Ok(BoundsOutcome {
            symbol: request.symbol.clone(),
            bounds: GridBounds {
                upper,
                lower,
                spacing,
                multiplier,
            },
            profile,
            current_price,
            data_points: series.len(),
            grid_count,
            investment_amount: request.investment_amount,
        })
    }

    /// Compute bounds for several symbols. A failing symbol degrades to a
    /// placeholder entry; it never aborts the batch.
    pub async fn calculate_many(&self, requests: &[BoundsRequest]) -> Vec<SymbolBounds> {
        let mut out = Vec::with_capacity(requests.len());
        for request in requests {
            match self.calculate(request).await {
                Ok(outcome) => out.push(SymbolBounds::Ready(Box::new(outcome))),
                Err(e) => {
                    tracing::warn!(symbol = %request.symbol, error = %e, "bounds unavailable");
                    out.push(SymbolBounds::Unavailable {
                        symbol: request.symbol.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        out
    }
}
