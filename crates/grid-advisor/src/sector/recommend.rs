//! Recommendation Synthesis
//!
//! Combines classified sectors with the ETF registry into ranked buy/avoid
//! lists and an allocation narrative.

use crate::config::RecommendConfig;
use crate::model::{
    AvoidSuggestion, BuySuggestion, DataQuality, EtfAlternative, Recommendation, Sector,
};
use crate::sector::classifier::{self, ClassifiedSectors};
use crate::sector::registry::SectorRegistry;

/// Fixed risk guidance attached to every recommendation
pub const RISK_NOTES: &str = "Sector growth figures are backward-looking and subject to revision; \
momentum can reverse within a reporting period. ETF market prices can deviate from net asset \
value in fast markets. Size positions so no single theme dominates the portfolio, and review \
holdings after each monthly data release.";

const MATERIALS_KEYWORDS: &[&str] = &["有色", "稀土", "金属"];
const TECH_KEYWORDS: &[&str] = &["电子", "半导体", "计算机", "通信", "软件"];
const TRANSPORT_DEFENSE_KEYWORDS: &[&str] = &["运输", "交通", "军工", "航空", "船舶"];

/// Builds buy/avoid lists and the strategy narrative
pub struct RecommendationSynthesizer {
    registry: SectorRegistry,
    config: RecommendConfig,
}

impl RecommendationSynthesizer {
    pub fn new(registry: SectorRegistry) -> Self {
        Self::with_config(registry, RecommendConfig::default())
    }

    pub fn with_config(registry: SectorRegistry, config: RecommendConfig) -> Self {
        Self { registry, config }
    }

    /// Turn a classified sector sequence into a full recommendation
    pub fn synthesize(&self, sectors: &[Sector], quality: DataQuality) -> Recommendation {
        let classes = classifier::partition(sectors);
        let buy_list = self.build_buy_list(&classes.strong);
        let avoid_list = self.build_avoid_list(&classes.weak, &buy_list);
        let strategy_narrative = self.narrative(&classes);

        Recommendation {
            buy_list,
            avoid_list,
            strategy_narrative,
            risk_notes: RISK_NOTES.to_string(),
            data_quality: quality,
        }
    }

    /// Strong sectors in parsed order, capped. The first registry keyword
    /// that matches wins; there is no fallthrough to later keys.
    fn build_buy_list(&self, strong: &[&Sector]) -> Vec<BuySuggestion> {
        let mut out = Vec::new();

        for sector in strong.iter().take(self.config.max_buy) {
            let Some(entry) = self.registry.lookup(&sector.name) else {
                tracing::debug!(sector = %sector.name, "no registry keyword matched");
                continue;
            };
            let Some(top) = entry.candidates.first() else {
                continue;
            };
            if top.is_avoid() {
                tracing::debug!(sector = %sector.name, code = %top.code, "top candidate tagged avoid");
                continue;
            }

            let alternative = entry.candidates.get(1).map(|c| EtfAlternative {
                code: c.code.clone(),
                name: c.name.clone(),
            });

            out.push(BuySuggestion {
                sector: sector.name.clone(),
                code: top.code.clone(),
                name: top.name.clone(),
                traded_volume: top.traded_volume.clone(),
                alternative,
                rationale: format!(
                    "Revenue growth {:+.1}%, profit growth {:+.1}%",
                    sector.revenue_growth, sector.profit_growth
                ),
            });
        }

        out
    }

    /// Weak sectors in parsed order, capped. A keyword hit names the ETF to
    /// avoid; a miss produces a generic note unless the sector already made
    /// the buy list.
    fn build_avoid_list(&self, weak: &[&Sector], buys: &[BuySuggestion]) -> Vec<AvoidSuggestion> {
        let mut out = Vec::new();

        for sector in weak.iter().take(self.config.max_avoid) {
            if let Some(top) = self
                .registry
                .lookup(&sector.name)
                .and_then(|entry| entry.candidates.first())
            {
                out.push(AvoidSuggestion {
                    sector: sector.name.clone(),
                    code: Some(top.code.clone()),
                    name: Some(top.name.clone()),
                    note: format!(
                        "Avoid {}: revenue growth {:+.1}%, profit growth {:+.1}%",
                        top.name, sector.revenue_growth, sector.profit_growth
                    ),
                });
            } else if !buys.iter().any(|b| b.sector == sector.name) {
                out.push(AvoidSuggestion {
                    sector: sector.name.clone(),
                    code: None,
                    name: None,
                    note: format!(
                        "Reduce exposure to {} (revenue growth {:+.1}%, profit growth {:+.1}%)",
                        sector.name, sector.revenue_growth, sector.profit_growth
                    ),
                });
            }
        }

        out
    }

    /// Decision tree on strong vs weak counts. The growth branch refines its
    /// allocation template by themed-group presence, most specific first.
    fn narrative(&self, classes: &ClassifiedSectors) -> String {
        let strong = classes.strong.len();
        let weak = classes.weak.len();

        if strong > weak {
            let names: Vec<&str> = classes.strong.iter().map(|s| s.name.as_str()).collect();
            let materials = contains_any(&names, MATERIALS_KEYWORDS);
            let tech = contains_any(&names, TECH_KEYWORDS);
            let defense = contains_any(&names, TRANSPORT_DEFENSE_KEYWORDS);

            let template = if materials && tech {
                "40% upstream materials and rare-earth ETFs, 40% technology and semiconductor \
                 ETFs, 20% cash reserved for grid replenishment"
            } else if tech {
                "50% technology and semiconductor ETFs, 30% broad-market ETFs, 20% cash"
            } else if materials {
                "50% materials and rare-earth ETFs, 30% broad-market ETFs, 20% cash"
            } else if defense {
                "40% transport and defense ETFs, 40% broad-market ETFs, 20% cash"
            } else {
                "overweight the strongest sectors at roughly 60/40 against broad-market ETFs"
            };

            format!(
                "Growth-oriented: {strong} of {total} sectors show strong momentum against \
                 {weak} weak. Suggested allocation: {template}.",
                total = classes.total()
            )
        } else if weak > strong {
            format!(
                "Defensive: {weak} sectors are deteriorating against {strong} strong. \
                 Underweight legacy industrial sectors, favor healthcare and consumer \
                 defensives, and raise the cash allocation."
            )
        } else {
            "Balanced: strong and weak sectors are evenly matched. Equal-weight the top themes \
             and rebalance on a regular schedule."
                .to_string()
        }
    }
}

fn contains_any(names: &[&str], keywords: &[&str]) -> bool {
    names
        .iter()
        .any(|name| keywords.iter().any(|k| name.contains(k)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifyConfig;
    use crate::model::EtfCandidate;
    use crate::sector::classifier::classify;
    use crate::sector::registry::RegistryEntry;

    fn sector(name: &str, revenue: f64, profit: f64) -> Sector {
        let config = ClassifyConfig::default();
        Sector {
            name: name.into(),
            revenue_growth: revenue,
            profit_growth: profit,
            performance: classify(revenue, profit, &config),
        }
    }

    fn entry(keyword: &str, candidates: Vec<EtfCandidate>) -> RegistryEntry {
        RegistryEntry {
            keyword: keyword.into(),
            candidates,
        }
    }

    #[test]
    fn test_buy_list_first_match_wins() {
        let registry = SectorRegistry::new(vec![
            entry(
                "金属",
                vec![EtfCandidate::new("100001", "金属ETF", "1.0亿", "金属")],
            ),
            entry(
                "有色",
                vec![EtfCandidate::new("100002", "有色ETF", "9.0亿", "有色")],
            ),
        ]);
        let synth = RecommendationSynthesizer::new(registry);

        let sectors = vec![sector("有色金属冶炼和压延加工业", 13.8, 6.9)];
        let rec = synth.synthesize(&sectors, DataQuality::Limited);

        assert_eq!(rec.buy_list.len(), 1);
        assert_eq!(rec.buy_list[0].code, "100001");
    }

    #[test]
    fn test_buy_list_cap_and_order() {
        let registry = SectorRegistry::builtin();
        let synth = RecommendationSynthesizer::new(registry);

        let sectors: Vec<Sector> = vec![
            sector("半导体器件制造业", 20.0, 25.0),
            sector("电子设备制造业", 11.2, 15.3),
            sector("计算机整机制造业", 9.0, 8.0),
            sector("通信设备制造业", 8.5, 7.5),
            sector("有色金属冶炼和压延加工业", 13.8, 6.9),
            sector("医药制造业", 6.1, 9.2),
            sector("汽车制造业", 8.7, 12.4),
        ];

        let rec = synth.synthesize(&sectors, DataQuality::Limited);
        assert_eq!(rec.buy_list.len(), 6);
        // parsed order, seventh strong sector dropped by the cap
        assert_eq!(rec.buy_list[0].code, "512480");
        assert_eq!(rec.buy_list[5].code, "512010");
    }

    #[test]
    fn test_buy_suggestion_carries_alternative() {
        let registry = SectorRegistry::builtin();
        let synth = RecommendationSynthesizer::new(registry);

        let sectors = vec![sector("半导体器件制造业", 20.0, 25.0)];
        let rec = synth.synthesize(&sectors, DataQuality::Limited);

        let alt = rec.buy_list[0].alternative.as_ref().unwrap();
        assert_eq!(alt.code, "159995");
    }

    #[test]
    fn test_avoid_tagged_top_candidate_yields_no_buy() {
        let registry = SectorRegistry::builtin();
        let synth = RecommendationSynthesizer::new(registry);

        // strong figures, but the coal bucket's top candidate carries the
        // avoid marker
        let sectors = vec![sector("煤炭开采和洗选业", 12.0, 18.0)];
        let rec = synth.synthesize(&sectors, DataQuality::Limited);
        assert!(rec.buy_list.is_empty());
    }

    #[test]
    fn test_avoid_list_explicit_and_generic_entries() {
        let registry = SectorRegistry::builtin();
        let synth = RecommendationSynthesizer::new(registry);

        let sectors = vec![
            sector("煤炭开采和洗选业", -2.3, -21.1),
            sector("烟草制品业", -1.0, -8.0),
        ];
        let rec = synth.synthesize(&sectors, DataQuality::Limited);

        assert_eq!(rec.avoid_list.len(), 2);
        assert_eq!(rec.avoid_list[0].code.as_deref(), Some("515220"));
        assert!(rec.avoid_list[1].code.is_none());
        assert!(rec.avoid_list[1].note.contains("烟草制品业"));
        assert!(rec.avoid_list[1].note.contains("-1.0"));
    }

    #[test]
    fn test_avoid_list_cap() {
        let registry = SectorRegistry::new(Vec::new());
        let synth = RecommendationSynthesizer::new(registry);

        let sectors: Vec<Sector> = (0..8)
            .map(|i| sector(&format!("衰退行业{i}"), -3.0, -10.0))
            .collect();
        let rec = synth.synthesize(&sectors, DataQuality::Limited);
        assert_eq!(rec.avoid_list.len(), 5);
    }

    #[test]
    fn test_growth_narrative_picks_most_specific_template() {
        let registry = SectorRegistry::builtin();
        let synth = RecommendationSynthesizer::new(registry);

        let sectors = vec![
            sector("有色金属冶炼和压延加工业", 13.8, 6.9),
            sector("电子设备制造业", 11.2, 15.3),
        ];
        let rec = synth.synthesize(&sectors, DataQuality::Limited);
        assert!(rec.strategy_narrative.starts_with("Growth-oriented"));
        assert!(rec.strategy_narrative.contains("materials and rare-earth"));
        assert!(rec.strategy_narrative.contains("technology and semiconductor"));
    }

    #[test]
    fn test_defensive_and_balanced_narratives() {
        let registry = SectorRegistry::builtin();
        let synth = RecommendationSynthesizer::new(registry);

        let weak_heavy = vec![
            sector("煤炭开采和洗选业", -2.3, -21.1),
            sector("钢铁冶炼业", -5.0, -12.0),
        ];
        let rec = synth.synthesize(&weak_heavy, DataQuality::Limited);
        assert!(rec.strategy_narrative.starts_with("Defensive"));

        let even = vec![
            sector("电子设备制造业", 11.2, 15.3),
            sector("煤炭开采和洗选业", -2.3, -21.1),
        ];
        let rec = synth.synthesize(&even, DataQuality::Limited);
        assert!(rec.strategy_narrative.starts_with("Balanced"));
    }

    #[test]
    fn test_risk_notes_are_fixed() {
        let synth = RecommendationSynthesizer::new(SectorRegistry::builtin());
        let rec = synth.synthesize(&[], DataQuality::Poor);
        assert_eq!(rec.risk_notes, RISK_NOTES);
        assert_eq!(rec.data_quality, DataQuality::Poor);
    }
}
