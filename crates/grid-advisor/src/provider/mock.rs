//! Mock Market Data Provider
//!
//! For testing and demo purposes. Serves deterministic price series.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{HistoryPeriod, MarketDataProvider};
use crate::error::{AdvisorError, Result};
use crate::model::{PricePoint, PriceSeries};

/// Mock provider with injectable series and failure symbols
pub struct MockMarketData {
    series: HashMap<String, Vec<Decimal>>,
    current_prices: HashMap<String, Decimal>,
    failing: HashSet<String>,
    start_date: NaiveDate,
}

impl Default for MockMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMarketData {
    pub fn new() -> Self {
        let mut series = HashMap::new();
        series.insert("510300".to_string(), builtin_walk(dec!(3.90), 30));
        series.insert("512480".to_string(), builtin_walk(dec!(0.85), 30));
        series.insert("512660".to_string(), builtin_walk(dec!(1.20), 30));

        Self {
            series,
            current_prices: HashMap::new(),
            failing: HashSet::new(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap_or_default(),
        }
    }

    /// Empty provider; add series with the builder methods
    pub fn empty() -> Self {
        Self {
            series: HashMap::new(),
            current_prices: HashMap::new(),
            failing: HashSet::new(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap_or_default(),
        }
    }

    /// Serve the given closes (oldest first) for a symbol
    pub fn with_series(mut self, symbol: impl Into<String>, closes: Vec<Decimal>) -> Self {
        self.series.insert(symbol.into(), closes);
        self
    }

    /// Report a separate current price for a symbol
    pub fn with_current_price(mut self, symbol: impl Into<String>, price: Decimal) -> Self {
        self.current_prices.insert(symbol.into(), price);
        self
    }

    /// Fail every fetch for a symbol
    pub fn with_failure(mut self, symbol: impl Into<String>) -> Self {
        self.failing.insert(symbol.into());
        self
    }
}

#[async_trait]
impl MarketDataProvider for MockMarketData {
    async fn price_history(&self, symbol: &str, period: HistoryPeriod) -> Result<PriceSeries> {
        if self.failing.contains(symbol) {
            return Err(AdvisorError::Provider(format!(
                "history fetch failed for {symbol}"
            )));
        }

        let closes = self
            .series
            .get(symbol)
            .ok_or_else(|| AdvisorError::Provider(format!("unknown symbol {symbol}")))?;

        let window = period.approx_days() as usize;
        let tail = &closes[closes.len().saturating_sub(window)..];

        let mut series = PriceSeries::new(symbol, period.approx_days());
        series.points = tail
            .iter()
            .enumerate()
            .map(|(i, close)| PricePoint {
                date: self
                    .start_date
                    .checked_add_days(Days::new(i as u64))
                    .unwrap_or(self.start_date),
                close: *close,
            })
            .collect();
        series.current_price = self.current_prices.get(symbol).copied();

        Ok(series)
    }

    fn name(&self) -> &str {
        "MockMarketData"
    }
}

/// Deterministic zig-zag walk around a base price
fn builtin_walk(base: Decimal, points: usize) -> Vec<Decimal> {
    let step = base * dec!(0.01);
    (0..points)
        .map(|i| {
            let swing = match i % 4 {
                0 => Decimal::ZERO,
                1 => step,
                2 => step * dec!(2),
                _ => step,
            };
            base + swing
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_builtin_series() {
        let provider = MockMarketData::new();

        let series = provider
            .price_history("510300", HistoryPeriod::OneMonth)
            .await
            .unwrap();
        assert_eq!(series.symbol, "510300");
        assert_eq!(series.len(), 30);
        assert!(series.best_price().unwrap() > Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_mock_unknown_symbol() {
        let provider = MockMarketData::new();
        let result = provider.price_history("599999", HistoryPeriod::OneMonth).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_failure_injection() {
        let provider = MockMarketData::new().with_failure("510300");
        let result = provider.price_history("510300", HistoryPeriod::OneMonth).await;
        assert!(matches!(result, Err(AdvisorError::Provider(_))));
    }

    #[tokio::test]
    async fn test_mock_window_truncation() {
        let provider = MockMarketData::new();
        let series = provider
            .price_history("510300", HistoryPeriod::FiveDay)
            .await
            .unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series.lookback_days, 5);
    }
}
