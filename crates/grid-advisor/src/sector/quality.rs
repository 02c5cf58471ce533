//! Parse Quality Assessment
//!
//! Grades how much of the source text turned into usable sector records.

use crate::config::QualityConfig;
use crate::model::DataQuality;

/// Tiered verdict from raw line count and parsed sector count
pub fn assess(line_count: usize, sector_count: usize, config: &QualityConfig) -> DataQuality {
    if sector_count > config.high_min_sectors && line_count > config.high_min_lines {
        DataQuality::High
    } else if sector_count > config.moderate_min_sectors {
        DataQuality::Moderate
    } else if sector_count > 0 {
        DataQuality::Limited
    } else {
        DataQuality::Poor
    }
}
