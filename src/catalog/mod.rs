//! Catalog Store: the fixed collection of insect records.
//!
//! Records are loaded once from a JSON dataset (the bundled one by default)
//! and never change afterwards. Everything here is read-only.

mod catalog;
mod error;
mod map;
mod record;
mod stats;

pub use catalog::{Catalog, EXPORT_FILE_NAME};
pub use error::CatalogError;
pub use map::MapPoint;
pub use record::{InsectId, InsectRecord};
pub use stats::CatalogStatistics;
