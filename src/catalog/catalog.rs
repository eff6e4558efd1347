use std::collections::HashSet;

use super::{CatalogError, CatalogStatistics, InsectId, InsectRecord, MapPoint};

const EMBEDDED_DATASET: &str = include_str!("../../data/insects.json");

/// Suggested file name for [`Catalog::export_json`] downloads.
pub const EXPORT_FILE_NAME: &str = "nasekomye-yaroslavl.json";

/// Immutable, ordered collection of insect records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    records: Vec<InsectRecord>,
}

impl Catalog {
    /// Build a catalog, keeping the given order. Ids must be unique.
    pub fn new(records: Vec<InsectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        Ok(Catalog { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<InsectRecord> =
            serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(records)
    }

    /// The dataset bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(EMBEDDED_DATASET)?;
        tracing::debug!(records = catalog.len(), "loaded embedded catalog");
        Ok(catalog)
    }

    /// All records, in insertion order.
    pub fn all(&self) -> &[InsectRecord] {
        &self.records
    }

    pub fn get(&self, id: InsectId) -> Option<&InsectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn statistics(&self) -> CatalogStatistics {
        CatalogStatistics::collect(&self.records)
    }

    pub fn map_points(&self) -> Vec<MapPoint> {
        self.records.iter().map(MapPoint::place).collect()
    }

    /// Pretty-printed JSON in the same shape [`Catalog::from_json`] reads.
    pub fn export_json(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(&self.records).map_err(CatalogError::Export)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a InsectRecord;
    type IntoIter = std::slice::Iter<'a, InsectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
