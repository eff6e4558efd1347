use std::collections::BTreeMap;

use super::InsectRecord;

/// Record counts, overall and per distinct type and rarity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogStatistics {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_rarity: BTreeMap<String, usize>,
}

impl CatalogStatistics {
    pub(crate) fn collect(records: &[InsectRecord]) -> Self {
        let mut stats = CatalogStatistics {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            *stats.by_type.entry(record.kind.clone()).or_insert(0) += 1;
            *stats.by_rarity.entry(record.rarity.clone()).or_insert(0) += 1;
        }
        stats
    }
}
