//! Domain Models
//!
//! Core data types for grid bound calculation and sector analysis.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!
//! Statistical quantities (volatility, growth percentages) stay f64.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Marker in an ETF's sector tag that excludes it from buy suggestions
pub const AVOID_MARKER: &str = "避免";

/// A single daily closing price
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date
    pub date: NaiveDate,

    /// Closing price
    pub close: Decimal,
}

/// Ordered closing price history for one symbol, oldest first
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Instrument symbol (e.g., "510300")
    pub symbol: String,

    /// Chronological closing prices, oldest first
    pub points: Vec<PricePoint>,

    /// Latest observed price, when the provider reports one separately
    pub current_price: Option<Decimal>,

    /// Lookback window the series actually covers, in days
    pub lookback_days: u32,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, lookback_days: u32) -> Self {
        Self {
            symbol: symbol.into(),
            points: Vec::new(),
            current_price: None,
            lookback_days,
        }
    }

    /// Number of data points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in chronological order
    pub fn closes(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Best available current price: the reported one, else the last close
    pub fn best_price(&self) -> Option<Decimal> {
        self.current_price
            .or_else(|| self.points.last().map(|p| p.close))
    }
}

/// Volatility regime buckets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityRegime {
    Low,
    Medium,
    High,
}

impl VolatilityRegime {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Low => "Low - tight ranges, narrow grids",
            Self::Medium => "Medium - normal grid spacing",
            Self::High => "High - wide bounds, fewer fills per level",
        }
    }
}

/// Measured or assumed volatility for one symbol
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct VolatilityProfile {
    /// Annualized log-return volatility (non-negative)
    pub annualized: f64,

    /// Regime bucket derived from the annualized figure
    pub regime: VolatilityRegime,

    /// True when the figure is an assumed default, not a measurement
    pub fallback: bool,
}

/// Upper/lower grid price levels for one symbol
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridBounds {
    /// Upper grid bound
    pub upper: Decimal,

    /// Lower grid bound, floored at a fraction of the current price
    pub lower: Decimal,

    /// Price distance between adjacent grid levels
    pub spacing: Decimal,

    /// Volatility multiplier used to derive the deviation
    pub multiplier: f64,
}

/// Flat record destined for the grid-creation call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridOrder {
    pub symbol: String,
    pub upper: Decimal,
    pub lower: Decimal,
    pub spacing: Decimal,
    pub grid_count: u32,
    pub investment_amount: Decimal,
}

/// Result of a bound calculation, with diagnostics
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoundsOutcome {
    /// Instrument symbol
    pub symbol: String,

    /// Computed bounds
    pub bounds: GridBounds,

    /// Volatility used to derive the bounds (flagged when assumed)
    pub profile: VolatilityProfile,

    /// Current price the bounds are anchored on
    pub current_price: Decimal,

    /// Number of historical points the estimate was drawn from
    pub data_points: usize,

    /// Grid level count
    pub grid_count: u32,

    /// Capital assigned to the grid
    pub investment_amount: Decimal,
}

impl BoundsOutcome {
    /// Flatten into the record the grid-creation call expects
    pub fn grid_order(&self) -> GridOrder {
        GridOrder {
            symbol: self.symbol.clone(),
            upper: self.bounds.upper,
            lower: self.bounds.lower,
            spacing: self.bounds.spacing,
            grid_count: self.grid_count,
            investment_amount: self.investment_amount,
        }
    }
}

/// Per-symbol entry in a multi-symbol bound batch
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SymbolBounds {
    /// Bounds were computed (possibly in fallback mode)
    Ready(Box<BoundsOutcome>),

    /// This symbol degraded to a placeholder; the batch continues
    Unavailable { symbol: String, reason: String },
}

/// Sector performance buckets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceClass {
    Strong,
    Weak,
    Mixed,
}

/// One parsed sector growth record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// Sector name as it appeared in the source text
    pub name: String,

    /// Year-over-year revenue growth, percent
    pub revenue_growth: f64,

    /// Year-over-year profit growth, percent
    pub profit_growth: f64,

    /// Class assigned at parse time
    pub performance: PerformanceClass,
}

/// An ETF candidate within a sector bucket
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EtfCandidate {
    /// Exchange code (e.g., "512480")
    pub code: String,

    /// Fund name
    pub name: String,

    /// Display string for traded volume (e.g., "21.5亿")
    pub traded_volume: String,

    /// Sector tag; may carry the explicit avoid marker
    pub sector_tag: String,
}

impl EtfCandidate {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        traded_volume: impl Into<String>,
        sector_tag: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            traded_volume: traded_volume.into(),
            sector_tag: sector_tag.into(),
        }
    }

    /// Whether the tag carries the avoid marker
    pub fn is_avoid(&self) -> bool {
        self.sector_tag.contains(AVOID_MARKER)
    }
}

/// Verdict on how much of the source text was usable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataQuality {
    High,
    Moderate,
    Limited,
    Poor,
}

impl DataQuality {
    pub fn describe(self) -> &'static str {
        match self {
            Self::High => "High - broad sector coverage",
            Self::Moderate => "Moderate - usable but partial coverage",
            Self::Limited => "Limited - few sectors extracted",
            Self::Poor => "Poor - no sector data extracted",
        }
    }
}

/// Second-ranked candidate offered alongside a buy suggestion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EtfAlternative {
    pub code: String,
    pub name: String,
}

/// One entry in the buy list
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuySuggestion {
    /// Sector the suggestion was derived from
    pub sector: String,

    /// Top-ranked ETF for the matched keyword
    pub code: String,
    pub name: String,
    pub traded_volume: String,

    /// Second-ranked candidate, when the bucket has one
    pub alternative: Option<EtfAlternative>,

    /// Growth figures backing the suggestion
    pub rationale: String,
}

/// One entry in the avoid list
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AvoidSuggestion {
    /// Sector the entry was derived from
    pub sector: String,

    /// Matched ETF, absent for a generic avoidance note
    pub code: Option<String>,
    pub name: Option<String>,

    /// Why this should be avoided
    pub note: String,
}

/// Full output of a sector text analysis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Recommendation {
    /// Ordered buy suggestions
    pub buy_list: Vec<BuySuggestion>,

    /// Ordered avoid entries
    pub avoid_list: Vec<AvoidSuggestion>,

    /// Allocation strategy narrative
    pub strategy_narrative: String,

    /// Fixed risk guidance
    pub risk_notes: String,

    /// Parse completeness verdict
    pub data_quality: DataQuality,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn point(day: u32, close: Decimal) -> PricePoint {
        PricePoint {
            date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            close,
        }
    }

    #[test]
    fn test_best_price_prefers_reported_current() {
        let mut series = PriceSeries::new("510300", 30);
        series.points = vec![point(1, dec!(3.90)), point(2, dec!(3.95))];
        assert_eq!(series.best_price(), Some(dec!(3.95)));

        series.current_price = Some(dec!(4.01));
        assert_eq!(series.best_price(), Some(dec!(4.01)));
    }

    #[test]
    fn test_best_price_empty_series() {
        let series = PriceSeries::new("510300", 30);
        assert_eq!(series.best_price(), None);
    }

    #[test]
    fn test_avoid_marker_detection() {
        let plain = EtfCandidate::new("512400", "有色金属ETF", "8.2亿", "有色金属");
        let tagged = EtfCandidate::new("515220", "煤炭ETF", "6.1亿", "煤炭(避免)");
        assert!(!plain.is_avoid());
        assert!(tagged.is_avoid());
    }

    #[test]
    fn test_grid_order_flattening() {
        let outcome = BoundsOutcome {
            symbol: "510300".into(),
            bounds: GridBounds {
                upper: dec!(4.4),
                lower: dec!(3.6),
                spacing: dec!(0.08),
                multiplier: 2.0,
            },
            profile: VolatilityProfile {
                annualized: 0.20,
                regime: VolatilityRegime::Medium,
                fallback: false,
            },
            current_price: dec!(4.0),
            data_points: 30,
            grid_count: 10,
            investment_amount: dec!(10000),
        };

        let order = outcome.grid_order();
        assert_eq!(order.symbol, "510300");
        assert_eq!(order.upper, dec!(4.4));
        assert_eq!(order.lower, dec!(3.6));
        assert_eq!(order.grid_count, 10);
        assert_eq!(order.investment_amount, dec!(10000));
    }
}
