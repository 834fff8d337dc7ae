//! Catalog Facet Index
//!
//! Derives the three filterable facets from the ordered record sequence:
//! language, series, and author combination. Each mapping preserves
//! first-seen order so the filter dropdowns list values in catalog order,
//! and each facet partitions the catalog: its counts sum to the number of
//! records.

use indexmap::IndexMap;

use super::{Author, BookRecord};

/// One author-combination facet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorFacet {
    /// Author names joined ", ", in the order of the first record seen
    /// with this combination.
    pub display_names: String,
    pub count: usize,
}

/// The derived facet mappings for one catalog session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetIndex {
    pub lang_counts: IndexMap<String, usize>,
    pub series_counts: IndexMap<String, usize>,
    pub author_combinations: IndexMap<String, AuthorFacet>,
}

/// Canonical key for a set of co-authors: ids sorted ascending, comma-joined.
///
/// The same key tags cards and groups facet entries, so a selection always
/// matches every record with that author set, regardless of the order the
/// record happens to list them in.
pub fn author_key(authors: &[Author]) -> String {
    let mut ids: Vec<u32> = authors.iter().map(|a| a.id).collect();
    ids.sort_unstable();
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl FacetIndex {
    /// Derive all three facets from the full record sequence.
    ///
    /// An empty catalog yields three empty mappings; records are never
    /// mutated.
    pub fn build(records: &[BookRecord]) -> Self {
        let mut index = FacetIndex::default();

        for record in records {
            *index.lang_counts.entry(record.lang.clone()).or_insert(0) += 1;
            *index.series_counts.entry(record.series.clone()).or_insert(0) += 1;

            let key = author_key(&record.author);
            let names = record
                .author
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            index
                .author_combinations
                .entry(key)
                .or_insert(AuthorFacet { display_names: names, count: 0 })
                .count += 1;
        }

        index
    }
}
