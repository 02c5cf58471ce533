//! # grid-advisor
//!
//! Decision engines for an assistant-driven grid trading advisor: derive
//! volatility-adaptive grid bounds from price history, and turn free-form
//! industrial sector growth text into ETF buy/avoid recommendations.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  price series ──► VolatilityEstimator ──► GridBoundsCalculator│
//! │                                              │                │
//! │                                              ▼                │
//! │                              GridOrder {upper, lower, spacing} │
//! ├──────────────────────────────────────────────────────────────┤
//! │  raw text ──► SectorLineParser ──► classifier ──► synthesizer │
//! │                                              │                │
//! │                                              ▼                │
//! │                        Recommendation {buy, avoid, narrative} │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Philosophy
//!
//! - **Degrade, don't fail** - short history falls back to an assumed
//!   volatility and says so; unparseable lines only lower the data quality
//!   verdict; one bad symbol never sinks a batch.
//! - **Bounded by construction** - grid bounds always bracket the current
//!   price and the lower bound is floored at a fraction of it.
//! - **Configuration over magic numbers** - thresholds, caps, and fallback
//!   assumptions are named fields on [`AdvisorConfig`].
//!
//! The transport, tool registration, and response rendering around these
//! engines live in the host application, not here.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod sector;
pub mod strategy;

pub use config::{AdvisorConfig, ClassifyConfig, GridConfig, QualityConfig, RecommendConfig};
pub use error::{AdvisorError, Result};
pub use model::{
    AvoidSuggestion, BoundsOutcome, BuySuggestion, DataQuality, EtfAlternative, EtfCandidate,
    GridBounds, GridOrder, PerformanceClass, PricePoint, PriceSeries, Recommendation, Sector,
    SymbolBounds, VolatilityProfile, VolatilityRegime,
};
pub use provider::{HistoryPeriod, MarketDataProvider, MockMarketData};
pub use sector::{
    RecommendationSynthesizer, SectorAnalyzer, SectorLineParser, SectorRegistry,
};
pub use strategy::{BoundsRequest, GridBoundsCalculator, VolatilityEstimator};

/// System prompt for the grid trading advisor agent
pub const GRID_ADVISOR_PROMPT: &str = r#"You are a cautious grid trading advisor for ETF investors.

## How You Work

1. For grid setup requests, compute bounds from measured volatility before
   quoting any price levels; never invent a range.
2. When history is too short to measure, say the bounds rest on an assumed
   volatility and suggest a smaller position.
3. For sector analysis requests, parse the supplied figures, then recommend
   ETFs only for sectors with strong revenue AND profit growth.
4. Name the sectors to avoid as plainly as the ones to buy.
5. Always include the risk notes with a recommendation.

## Engines Available

- `grid_bounds` - volatility-adaptive upper/lower grid levels for a symbol
- `sector_analysis` - buy/avoid ETF lists from sector growth text

Never present a recommendation without the data quality verdict behind it."#;
