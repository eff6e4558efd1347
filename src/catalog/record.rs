use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an insect record. Serialized as a bare integer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InsectId(pub u32);

impl fmt::Display for InsectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for InsectId {
    fn from(id: u32) -> Self {
        InsectId(id)
    }
}

/// One species card. Field names on the wire follow the bundled dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsectRecord {
    pub id: InsectId,
    pub name: String,
    pub latin_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rarity: String,
    /// Human-readable month range, e.g. "Май-Сентябрь".
    pub season: String,
    pub habitat: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Cosmetic placement only, not a real geographic position.
    pub coordinates: [f64; 2],
    #[serde(default)]
    pub facts: Vec<String>,
}
