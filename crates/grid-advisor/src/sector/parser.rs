//! Sector Line Parser
//!
//! Best-effort extraction of sector growth records from free-form report
//! text. Input may mix Chinese and English labels and ASCII and full-width
//! punctuation. Each non-empty line runs through an ordered cascade of
//! pattern strategies; the first match wins, and lines nothing matches are
//! silently dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ClassifyConfig;
use crate::model::Sector;
use crate::sector::classifier;

static BILINGUAL_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>[^:：]+)[:：].*?(?:营业收入|营收)(?:同比)?增长\s*(?P<rev>[+-]?\d+(?:\.\d+)?)\s*[%％].*?(?:利润总额|利润)(?:同比)?增长\s*(?P<profit>[+-]?\d+(?:\.\d+)?)\s*[%％]",
    )
    .expect("bilingual pattern is valid")
});

static ENGLISH_DASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<name>.+?)\s*-\s*Revenue\s+Growth:\s*(?P<rev>[+-]?\d+(?:\.\d+)?)\s*%.*?Profit\s+Growth:\s*(?P<profit>[+-]?\d+(?:\.\d+)?)\s*%",
    )
    .expect("english pattern is valid")
});

/// Lines containing any of these are discarded before the cascade runs
const BOILERPLATE_MARKERS: &[&str] = &[
    "行业名称",
    "Sector Name",
    "数据来源",
    "Source:",
    "单位：",
    "单位:",
];

/// Numbers extracted from one line, before classification
struct RawSectorLine {
    name: String,
    revenue_growth: f64,
    profit_growth: f64,
}

/// A single line-level pattern strategy. Returns the extracted record on
/// match, `None` to let the next strategy try.
trait LineMatcher: Send + Sync {
    fn name(&self) -> &'static str;
    fn try_match(&self, line: &str) -> Option<RawSectorLine>;
}

/// `<name><colon> ... 营业收入同比增长 <n>% ... 利润总额同比增长 <n>%`
struct BilingualLabeled;

impl LineMatcher for BilingualLabeled {
    fn name(&self) -> &'static str {
        "bilingual_labeled"
    }

    fn try_match(&self, line: &str) -> Option<RawSectorLine> {
        let caps = BILINGUAL_LABELED.captures(line)?;
        build_raw(
            caps.name("name")?.as_str(),
            caps.name("rev")?.as_str(),
            caps.name("profit")?.as_str(),
        )
    }
}

/// `<name> - Revenue Growth: <n>% ... Profit Growth: <n>%`
struct EnglishDashed;

impl LineMatcher for EnglishDashed {
    fn name(&self) -> &'static str {
        "english_dashed"
    }

    fn try_match(&self, line: &str) -> Option<RawSectorLine> {
        let caps = ENGLISH_DASHED.captures(line)?;
        build_raw(
            caps.name("name")?.as_str(),
            caps.name("rev")?.as_str(),
            caps.name("profit")?.as_str(),
        )
    }
}

/// Leading non-numeric name tokens followed by two numeric tokens
struct GenericTabular;

impl LineMatcher for GenericTabular {
    fn name(&self) -> &'static str {
        "generic_tabular"
    }

    fn try_match(&self, line: &str) -> Option<RawSectorLine> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return None;
        }

        let first_numeric = tokens.iter().position(|t| parse_percent(t).is_some())?;
        if first_numeric == 0 || tokens.len() < first_numeric + 2 {
            return None;
        }

        let revenue_growth = parse_percent(tokens[first_numeric])?;
        let profit_growth = parse_percent(tokens[first_numeric + 1])?;
        let name = tokens[..first_numeric].join(" ");

        build_raw_parsed(&name, revenue_growth, profit_growth)
    }
}

fn build_raw(name: &str, rev: &str, profit: &str) -> Option<RawSectorLine> {
    let revenue_growth: f64 = rev.parse().ok()?;
    let profit_growth: f64 = profit.parse().ok()?;
    build_raw_parsed(name, revenue_growth, profit_growth)
}

fn build_raw_parsed(name: &str, revenue_growth: f64, profit_growth: f64) -> Option<RawSectorLine> {
    let name = name.trim();
    if name.is_empty() || !revenue_growth.is_finite() || !profit_growth.is_finite() {
        return None;
    }
    Some(RawSectorLine {
        name: name.to_string(),
        revenue_growth,
        profit_growth,
    })
}

/// Parse a numeric token, tolerating a percent sign and trailing punctuation
fn parse_percent(token: &str) -> Option<f64> {
    let trimmed = token.trim_end_matches(|c| matches!(c, '%' | '％' | ',' | '，' | ';' | '；'));
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_boilerplate(line: &str) -> bool {
    line.starts_with('#')
        || line
            .chars()
            .all(|c| matches!(c, '-' | '=' | '|' | '+' | ' '))
        || BOILERPLATE_MARKERS.iter().any(|m| line.contains(m))
}

/// Result of parsing one block of report text
#[derive(Clone, Debug)]
pub struct ParsedReport {
    /// Sectors in source order, classes assigned at parse time
    pub sectors: Vec<Sector>,

    /// Non-empty lines seen, including ones nothing matched
    pub line_count: usize,
}

/// Ordered cascade of line pattern strategies
pub struct SectorLineParser {
    matchers: Vec<Box<dyn LineMatcher>>,
    classify: ClassifyConfig,
}

impl Default for SectorLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorLineParser {
    pub fn new() -> Self {
        Self::with_config(ClassifyConfig::default())
    }

    pub fn with_config(classify: ClassifyConfig) -> Self {
        Self {
            matchers: vec![
                Box::new(BilingualLabeled),
                Box::new(EnglishDashed),
                Box::new(GenericTabular),
            ],
            classify,
        }
    }

    /// Extract sector records from raw multi-line text. Never fails:
    /// unusable lines only lower the data quality verdict.
    pub fn parse(&self, text: &str) -> ParsedReport {
        let mut sectors = Vec::new();
        let mut line_count = 0;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            line_count += 1;

            if is_boilerplate(line) {
                continue;
            }

            let Some((strategy, raw)) = self
                .matchers
                .iter()
                .find_map(|m| m.try_match(line).map(|raw| (m.name(), raw)))
            else {
                tracing::trace!(line, "no parser strategy matched");
                continue;
            };

            tracing::trace!(strategy, sector = %raw.name, "line matched");
            let performance =
                classifier::classify(raw.revenue_growth, raw.profit_growth, &self.classify);
            sectors.push(Sector {
                name: raw.name,
                revenue_growth: raw.revenue_growth,
                profit_growth: raw.profit_growth,
                performance,
            });
        }

        ParsedReport {
            sectors,
            line_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PerformanceClass;

    #[test]
    fn test_bilingual_labeled_lines() {
        let text = "有色金属冶炼和压延加工业: 营业收入同比增长 13.8%, 利润总额同比增长 6.9%\n电子设备制造业: 营业收入同比增长 11.2%, 利润总额同比增长 15.3%";
        let report = SectorLineParser::new().parse(text);

        assert_eq!(report.sectors.len(), 2);
        assert_eq!(report.line_count, 2);

        let first = &report.sectors[0];
        assert_eq!(first.name, "有色金属冶炼和压延加工业");
        assert!((first.revenue_growth - 13.8).abs() < f64::EPSILON);
        assert!((first.profit_growth - 6.9).abs() < f64::EPSILON);
        assert_eq!(first.performance, PerformanceClass::Strong);

        let second = &report.sectors[1];
        assert_eq!(second.name, "电子设备制造业");
        assert!((second.revenue_growth - 11.2).abs() < f64::EPSILON);
        assert!((second.profit_growth - 15.3).abs() < f64::EPSILON);
        assert_eq!(second.performance, PerformanceClass::Strong);
    }

    #[test]
    fn test_full_width_punctuation() {
        let text = "通用设备制造业：营业收入同比增长 4.2％，利润总额同比增长 -1.5％";
        let report = SectorLineParser::new().parse(text);

        assert_eq!(report.sectors.len(), 1);
        assert_eq!(report.sectors[0].name, "通用设备制造业");
        assert!((report.sectors[0].profit_growth + 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_english_dashed_form() {
        let text = "Steel Products - Revenue Growth: -3.2%, Profit Growth: -8.1%";
        let report = SectorLineParser::new().parse(text);

        assert_eq!(report.sectors.len(), 1);
        assert_eq!(report.sectors[0].name, "Steel Products");
        assert!((report.sectors[0].revenue_growth + 3.2).abs() < f64::EPSILON);
        assert_eq!(report.sectors[0].performance, PerformanceClass::Weak);
    }

    #[test]
    fn test_generic_tabular_form() {
        let text = "汽车制造业 8.7 12.4\n纺织业 -2.1% -6.3%";
        let report = SectorLineParser::new().parse(text);

        assert_eq!(report.sectors.len(), 2);
        assert_eq!(report.sectors[0].name, "汽车制造业");
        assert!((report.sectors[0].revenue_growth - 8.7).abs() < f64::EPSILON);
        assert_eq!(report.sectors[1].name, "纺织业");
        assert!((report.sectors[1].profit_growth + 6.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_labeled_strategy_has_priority_over_tabular() {
        // A labeled line also contains numeric tokens; the labeled strategy
        // must win so the name excludes the label text.
        let text = "医药制造业: 营业收入同比增长 6.1%, 利润总额同比增长 9.2%";
        let report = SectorLineParser::new().parse(text);
        assert_eq!(report.sectors[0].name, "医药制造业");
    }

    #[test]
    fn test_unparseable_lines_drop_silently() {
        let text = "工业企业利润延续恢复态势\n电子设备制造业: 营业收入同比增长 11.2%, 利润总额同比增长 15.3%\n整体利润率仍待改善";
        let report = SectorLineParser::new().parse(text);

        assert_eq!(report.sectors.len(), 1);
        assert_eq!(report.line_count, 3);
    }

    #[test]
    fn test_boilerplate_lines_discarded() {
        let text = "# 规模以上工业企业利润\n行业名称 营收增速 利润增速\n-------\n数据来源: 国家统计局\n汽车制造业 8.7 12.4";
        let report = SectorLineParser::new().parse(text);

        assert_eq!(report.sectors.len(), 1);
        assert_eq!(report.sectors[0].name, "汽车制造业");
    }

    #[test]
    fn test_source_order_preserved() {
        let text = "煤炭开采和洗选业: 营业收入同比增长 -2.3%, 利润总额同比增长 -21.1%\n电子设备制造业: 营业收入同比增长 11.2%, 利润总额同比增长 15.3%";
        let report = SectorLineParser::new().parse(text);

        assert_eq!(report.sectors[0].name, "煤炭开采和洗选业");
        assert_eq!(report.sectors[0].performance, PerformanceClass::Weak);
        assert_eq!(report.sectors[1].name, "电子设备制造业");
    }

    #[test]
    fn test_name_required_nonempty() {
        // Numeric tokens with no leading name token must not produce a record
        let text = "13.8 6.9 11.2";
        let report = SectorLineParser::new().parse(text);
        assert!(report.sectors.is_empty());
        assert_eq!(report.line_count, 1);
    }
}
