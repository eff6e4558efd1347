//! Stored form of the favorites set: a JSON array of integer ids.

use crate::catalog::InsectId;

pub fn encode_favorites(ids: &[InsectId]) -> Result<String, serde_json::Error> {
    serde_json::to_string(ids)
}

/// Decode a stored favorites value. Anything that is not a JSON array of
/// non-negative integers decodes to the empty set. Duplicates are dropped,
/// keeping the first occurrence.
pub fn decode_favorites(stored: &str) -> Result<Vec<InsectId>, serde_json::Error> {
    let decoded: Option<Vec<InsectId>> = serde_json::from_str(stored)?;
    let mut ids: Vec<InsectId> = Vec::new();
    for id in decoded.unwrap_or_default() {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
