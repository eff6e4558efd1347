use insect_atlas::{Catalog, InsectId, InsectRecord};

pub fn record(id: u32, name: &str, kind: &str, rarity: &str, season: &str) -> InsectRecord {
    InsectRecord {
        id: InsectId(id),
        name: name.to_string(),
        latin_name: format!("Species {}", id),
        kind: kind.to_string(),
        rarity: rarity.to_string(),
        season: season.to_string(),
        habitat: "Meadows".to_string(),
        description: format!("{} description", name),
        image: String::new(),
        coordinates: [57.6, 39.9],
        facts: Vec::new(),
    }
}

/// Four records, one per type, English labels.
pub fn english_catalog() -> Catalog {
    Catalog::new(vec![
        record(1, "Swallowtail", "Butterfly", "rare", "Март-Май, Июнь-Август"),
        record(2, "Honey bee", "Bee", "common", "Март-Май"),
        record(3, "Ladybird", "Beetle", "common", "Июнь-Август"),
        record(4, "Broad-bodied chaser", "Dragonfly", "common", "Сентябрь-Ноябрь"),
    ])
    .unwrap()
}
