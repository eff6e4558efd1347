use crate::catalog::InsectRecord;

use super::FilterCriteria;

/// Queries shorter than this many characters do not filter.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Records of `catalog` that satisfy every active filter in `criteria`,
/// in catalog order.
pub fn search<'a, I>(catalog: I, criteria: &FilterCriteria) -> Vec<&'a InsectRecord>
where
    I: IntoIterator<Item = &'a InsectRecord>,
{
    search_with(catalog, criteria, DEFAULT_MIN_QUERY_CHARS)
}

/// [`search`] with a custom minimum query length.
pub fn search_with<'a, I>(
    catalog: I,
    criteria: &FilterCriteria,
    min_query_chars: usize,
) -> Vec<&'a InsectRecord>
where
    I: IntoIterator<Item = &'a InsectRecord>,
{
    let needle = text_needle(&criteria.query, min_query_chars);

    let visible: Vec<&InsectRecord> = catalog
        .into_iter()
        .filter(|record| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_text(record, needle))
                && criteria.kind.matches(&record.kind)
                && criteria.rarity.matches(&record.rarity)
                && criteria.season.matches(&record.season)
        })
        .collect();

    tracing::debug!(
        query = %criteria.query,
        visible = visible.len(),
        "applied catalog filters"
    );
    visible
}

/// Counter text shown above the result list.
pub fn results_summary(count: usize) -> String {
    format!("Найдено: {} насекомых", count)
}

fn text_needle(query: &str, min_query_chars: usize) -> Option<String> {
    if query.chars().count() < min_query_chars {
        None
    } else {
        Some(query.to_lowercase())
    }
}

fn matches_text(record: &InsectRecord, needle: &str) -> bool {
    [
        &record.name,
        &record.latin_name,
        &record.kind,
        &record.description,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
