//! Decision Engines - Sector Analysis
//!
//! Parsing, classification, and ETF recommendation synthesis for free-form
//! sector growth text.

pub mod classifier;
pub mod parser;
pub mod quality;
pub mod recommend;
pub mod registry;

pub use classifier::{ClassifiedSectors, classify, classify_sectors, partition};
pub use parser::{ParsedReport, SectorLineParser};
pub use recommend::{RISK_NOTES, RecommendationSynthesizer};
pub use registry::{RegistryEntry, SectorRegistry};

use crate::config::{AdvisorConfig, QualityConfig};
use crate::model::Recommendation;

/// Full text-analysis pipeline: parse, grade, synthesize
pub struct SectorAnalyzer {
    parser: SectorLineParser,
    synthesizer: RecommendationSynthesizer,
    quality: QualityConfig,
}

impl SectorAnalyzer {
    pub fn new(registry: SectorRegistry) -> Self {
        Self::with_config(registry, AdvisorConfig::default())
    }

    pub fn with_config(registry: SectorRegistry, config: AdvisorConfig) -> Self {
        Self {
            parser: SectorLineParser::with_config(config.classify),
            synthesizer: RecommendationSynthesizer::with_config(registry, config.recommend),
            quality: config.quality,
        }
    }

    /// Analyze raw report text into a recommendation
    pub fn analyze(&self, text: &str) -> Recommendation {
        let report = self.parser.parse(text);
        let verdict = quality::assess(report.line_count, report.sectors.len(), &self.quality);
        tracing::debug!(
            sectors = report.sectors.len(),
            lines = report.line_count,
            quality = ?verdict,
            "sector text parsed"
        );
        self.synthesizer.synthesize(&report.sectors, verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataQuality;

    #[test]
    fn test_end_to_end_analysis() {
        let analyzer = SectorAnalyzer::new(SectorRegistry::builtin());
        let text = "有色金属冶炼和压延加工业: 营业收入同比增长 13.8%, 利润总额同比增长 6.9%\n电子设备制造业: 营业收入同比增长 11.2%, 利润总额同比增长 15.3%";

        let rec = analyzer.analyze(text);

        assert_eq!(rec.buy_list.len(), 2);
        assert_eq!(rec.buy_list[0].code, "512400");
        assert_eq!(rec.buy_list[1].code, "159997");
        assert!(rec.avoid_list.is_empty());
        assert_eq!(rec.data_quality, DataQuality::Limited);
        assert!(rec.strategy_narrative.starts_with("Growth-oriented"));
    }

    #[test]
    fn test_unusable_text_degrades_to_poor() {
        let analyzer = SectorAnalyzer::new(SectorRegistry::builtin());
        let rec = analyzer.analyze("工业利润延续恢复态势，结构持续优化。");

        assert!(rec.buy_list.is_empty());
        assert!(rec.avoid_list.is_empty());
        assert_eq!(rec.data_quality, DataQuality::Poor);
    }
}
