//! Market Data Integration
//!
//! Abstractions and implementations for market data providers.

mod mock;

pub use mock::MockMarketData;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::PriceSeries;

/// Coarse history granularities the provider supports
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryPeriod {
    FiveDay,
    OneMonth,
    ThreeMonth,
    SixMonth,
    OneYear,
}

impl HistoryPeriod {
    /// Quantize a requested lookback window to a supported granularity
    pub fn from_lookback_days(days: u32) -> Self {
        match days {
            0..=5 => Self::FiveDay,
            6..=30 => Self::OneMonth,
            31..=90 => Self::ThreeMonth,
            91..=180 => Self::SixMonth,
            _ => Self::OneYear,
        }
    }

    /// Window the granularity actually covers, in days
    pub fn approx_days(self) -> u32 {
        match self {
            Self::FiveDay => 5,
            Self::OneMonth => 30,
            Self::ThreeMonth => 90,
            Self::SixMonth => 180,
            Self::OneYear => 365,
        }
    }

    /// Query token the remote API expects
    pub fn as_query(self) -> &'static str {
        match self {
            Self::FiveDay => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonth => "3mo",
            Self::SixMonth => "6mo",
            Self::OneYear => "1y",
        }
    }
}

/// Market data provider trait (Strategy pattern)
///
/// Implement this for each backend that can serve closing price history.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch ordered closing prices for a symbol at the given granularity.
    /// The series carries an optional separately-reported current price.
    async fn price_history(&self, symbol: &str, period: HistoryPeriod) -> Result<PriceSeries>;

    /// Provider name
    fn name(&self) -> &str;
}
