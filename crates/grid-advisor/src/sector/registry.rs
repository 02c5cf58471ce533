//! Sector to ETF Registry
//!
//! Curated mapping from sector keyword to ranked ETF candidates. Entries are
//! scanned in declaration order and candidates are ordered by traded volume
//! descending, so both orders are semantic. The registry is an immutable
//! value built once at startup; tests inject their own tables.

use serde::{Deserialize, Serialize};

use crate::model::EtfCandidate;

/// One keyword bucket with its ranked candidates
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Matched as a substring of the sector name
    pub keyword: String,

    /// Candidates, highest traded volume first
    pub candidates: Vec<EtfCandidate>,
}

/// Immutable sector keyword to ETF mapping
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SectorRegistry {
    entries: Vec<RegistryEntry>,
}

impl SectorRegistry {
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    /// First entry (in declaration order) whose keyword is a substring of
    /// the sector name
    pub fn lookup(&self, sector_name: &str) -> Option<&RegistryEntry> {
        self.entries
            .iter()
            .find(|entry| sector_name.contains(&entry.keyword))
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Curated table for CN industrial sectors
    pub fn builtin() -> Self {
        Self::new(vec![
            entry(
                "半导体",
                vec![
                    EtfCandidate::new("512480", "半导体ETF", "21.5亿", "半导体"),
                    EtfCandidate::new("159995", "芯片ETF", "18.9亿", "半导体"),
                ],
            ),
            entry(
                "电子",
                vec![
                    EtfCandidate::new("159997", "电子ETF", "4.5亿", "电子"),
                    EtfCandidate::new("515260", "电子50ETF", "1.8亿", "电子"),
                ],
            ),
            entry(
                "计算机",
                vec![
                    EtfCandidate::new("512720", "计算机ETF", "3.2亿", "计算机"),
                    EtfCandidate::new("159998", "计算机龙头ETF", "2.1亿", "计算机"),
                ],
            ),
            entry(
                "通信",
                vec![EtfCandidate::new("515050", "5G通信ETF", "5.2亿", "通信")],
            ),
            entry(
                "有色金属",
                vec![
                    EtfCandidate::new("512400", "有色金属ETF", "8.2亿", "有色金属"),
                    EtfCandidate::new("159871", "有色60ETF", "3.1亿", "有色金属"),
                ],
            ),
            entry(
                "稀土",
                vec![EtfCandidate::new("516780", "稀土产业ETF", "2.4亿", "稀土")],
            ),
            entry(
                "军工",
                vec![
                    EtfCandidate::new("512660", "军工ETF", "7.8亿", "军工"),
                    EtfCandidate::new("512710", "军工龙头ETF", "4.3亿", "军工"),
                ],
            ),
            entry(
                "医药",
                vec![
                    EtfCandidate::new("512010", "医药ETF", "5.6亿", "医药"),
                    EtfCandidate::new("159929", "医药卫生ETF", "1.9亿", "医药"),
                ],
            ),
            entry(
                "汽车",
                vec![EtfCandidate::new("516110", "汽车ETF", "1.5亿", "汽车")],
            ),
            entry(
                "电力",
                vec![EtfCandidate::new("159611", "电力ETF", "2.8亿", "电力")],
            ),
            entry(
                "酒",
                vec![EtfCandidate::new("512690", "酒ETF", "11.2亿", "白酒")],
            ),
            entry(
                "食品",
                vec![EtfCandidate::new("159843", "食品饮料ETF", "1.4亿", "食品饮料")],
            ),
            entry(
                "化学",
                vec![EtfCandidate::new("159870", "化工ETF", "2.2亿", "化工")],
            ),
            entry(
                "钢铁",
                vec![EtfCandidate::new("515210", "钢铁ETF", "3.4亿", "钢铁(避免)")],
            ),
            entry(
                "煤炭",
                vec![EtfCandidate::new("515220", "煤炭ETF", "6.1亿", "煤炭(避免)")],
            ),
            entry(
                "运输",
                vec![EtfCandidate::new("561320", "交通运输ETF", "0.6亿", "交通运输")],
            ),
            entry(
                "银行",
                vec![EtfCandidate::new("512800", "银行ETF", "9.3亿", "银行")],
            ),
        ])
    }
}

fn entry(keyword: &str, candidates: Vec<EtfCandidate>) -> RegistryEntry {
    RegistryEntry {
        keyword: keyword.to_string(),
        candidates,
    }
}
