//! Sector Performance Classification
//!
//! Pure strong/weak/mixed bucketing over paired growth figures.

use crate::config::ClassifyConfig;
use crate::model::{PerformanceClass, Sector};

/// Classify one pair of growth figures.
///
/// Every comparison is strict: exactly 5/5 is Mixed, not Strong. The buckets
/// are mutually exclusive and exhaustive.
pub fn classify(
    revenue_growth: f64,
    profit_growth: f64,
    config: &ClassifyConfig,
) -> PerformanceClass {
    if revenue_growth > config.strong_growth_floor && profit_growth > config.strong_growth_floor {
        PerformanceClass::Strong
    } else if revenue_growth < config.weak_revenue_ceiling
        || profit_growth < config.weak_profit_floor
    {
        PerformanceClass::Weak
    } else {
        PerformanceClass::Mixed
    }
}

/// Re-derive classes for a parsed sequence, in place. Classes depend only on
/// the growth figures, so reclassification is idempotent and order-preserving.
pub fn classify_sectors(sectors: &mut [Sector], config: &ClassifyConfig) {
    for sector in sectors.iter_mut() {
        sector.performance = classify(sector.revenue_growth, sector.profit_growth, config);
    }
}

/// Parsed-order views over a classified sequence
#[derive(Debug, Default)]
pub struct ClassifiedSectors<'a> {
    pub strong: Vec<&'a Sector>,
    pub weak: Vec<&'a Sector>,
    pub mixed: Vec<&'a Sector>,
}

impl ClassifiedSectors<'_> {
    pub fn total(&self) -> usize {
        self.strong.len() + self.weak.len() + self.mixed.len()
    }
}

/// Split a classified sequence into per-class views, preserving parse order
pub fn partition(sectors: &[Sector]) -> ClassifiedSectors<'_> {
    let mut classes = ClassifiedSectors::default();
    for sector in sectors {
        match sector.performance {
            PerformanceClass::Strong => classes.strong.push(sector),
            PerformanceClass::Weak => classes.weak.push(sector),
            PerformanceClass::Mixed => classes.mixed.push(sector),
        }
    }
    classes
}
