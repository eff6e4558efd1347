use thiserror::Error;

use super::InsectId;

/// Error type for building or exporting a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset is not a JSON array of insect records.
    #[error("failed to parse insect dataset")]
    Parse(#[source] serde_json::Error),

    /// Two records share the same identifier.
    #[error("duplicate insect id {0}")]
    DuplicateId(InsectId),

    /// The catalog could not be serialized for export.
    #[error("failed to export insect catalog")]
    Export(#[source] serde_json::Error),
}
