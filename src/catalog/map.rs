use super::{InsectId, InsectRecord};

/// Marker on the simplified distribution map.
///
/// `top` and `left` are percentages of the map area, derived from the record
/// coordinates modulo 50. They only spread markers out visually.
#[derive(Clone, Debug, PartialEq)]
pub struct MapPoint {
    pub id: InsectId,
    pub name: String,
    pub image: String,
    pub top: f64,
    pub left: f64,
}

impl MapPoint {
    pub(crate) fn place(record: &InsectRecord) -> Self {
        MapPoint {
            id: record.id,
            name: record.name.clone(),
            image: record.image.clone(),
            top: record.coordinates[0] % 50.0,
            left: record.coordinates[1] % 50.0,
        }
    }
}
