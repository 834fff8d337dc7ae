//! Filter Engine
//!
//! Session-scoped multi-facet selection and the card matching rule. The
//! selection starts empty when a catalog session opens, is mutated one value
//! at a time, and is discarded with the session. A card is visible iff every
//! dimension with an active selection contains the card's value; a dimension
//! with no selection imposes no constraint.

use indexmap::IndexSet;

use super::facets::author_key;
use super::BookRecord;

/// The three filterable dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetDimension {
    Lang,
    Series,
    Author,
}

impl FacetDimension {
    /// The `data-filter-type` attribute value for this dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetDimension::Lang => "lang",
            FacetDimension::Series => "series",
            FacetDimension::Author => "author",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FacetDimension::Lang => "Language",
            FacetDimension::Series => "Series",
            FacetDimension::Author => "Author",
        }
    }

    pub fn all() -> &'static [FacetDimension] {
        &[FacetDimension::Lang, FacetDimension::Series, FacetDimension::Author]
    }
}

/// The per-card facet values a match test reads: the same strings the card
/// carries in its `data-lang` / `data-series` / `data-author-ids`
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFacets {
    pub lang: String,
    pub series: String,
    pub author_key: String,
}

impl CardFacets {
    pub fn of(record: &BookRecord) -> Self {
        Self {
            lang: record.lang.clone(),
            series: record.series.clone(),
            author_key: author_key(&record.author),
        }
    }
}

/// The active selection, one value set per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    lang: IndexSet<String>,
    series: IndexSet<String>,
    author: IndexSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_mut(&mut self, dimension: FacetDimension) -> &mut IndexSet<String> {
        match dimension {
            FacetDimension::Lang => &mut self.lang,
            FacetDimension::Series => &mut self.series,
            FacetDimension::Author => &mut self.author,
        }
    }

    fn set(&self, dimension: FacetDimension) -> &IndexSet<String> {
        match dimension {
            FacetDimension::Lang => &self.lang,
            FacetDimension::Series => &self.series,
            FacetDimension::Author => &self.author,
        }
    }

    /// Add or remove one value. Set-membership semantics: repeating the
    /// same call changes nothing.
    pub fn toggle(&mut self, dimension: FacetDimension, value: &str, is_now_selected: bool) {
        let set = self.set_mut(dimension);
        if is_now_selected {
            set.insert(value.to_string());
        } else {
            set.shift_remove(value);
        }
    }

    /// Back to no-filters-active.
    pub fn clear(&mut self) {
        self.lang.clear();
        self.series.clear();
        self.author.clear();
    }

    pub fn contains(&self, dimension: FacetDimension, value: &str) -> bool {
        self.set(dimension).contains(value)
    }

    /// Whether this dimension constrains visibility at all.
    pub fn has_selection(&self, dimension: FacetDimension) -> bool {
        !self.set(dimension).is_empty()
    }

    /// No dimension has an active selection ("All" state).
    pub fn is_empty(&self) -> bool {
        self.lang.is_empty() && self.series.is_empty() && self.author.is_empty()
    }

    /// The visibility rule: AND across dimensions, each empty dimension
    /// passing everything.
    pub fn matches(&self, card: &CardFacets) -> bool {
        let lang_match = self.lang.is_empty() || self.lang.contains(&card.lang);
        let series_match = self.series.is_empty() || self.series.contains(&card.series);
        let author_match = self.author.is_empty() || self.author.contains(&card.author_key);
        lang_match && series_match && author_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Author;

    fn record(id: u32, lang: &str, series: &str, author_ids: &[u32]) -> BookRecord {
        BookRecord {
            id,
            title: format!("Book {id}"),
            lang: lang.into(),
            series: series.into(),
            author: author_ids
                .iter()
                .map(|id| Author { id: *id, name: format!("Author {id}") })
                .collect(),
            image: String::new(),
            excerpt: None,
            description: String::new(),
        }
    }

    fn visible(records: &[BookRecord], selection: &FilterSelection) -> Vec<u32> {
        records
            .iter()
            .filter(|r| selection.matches(&CardFacets::of(r)))
            .map(|r| r.id)
            .collect()
    }

    fn sample() -> Vec<BookRecord> {
        vec![
            record(1, "EN", "A", &[10]),
            record(2, "EN", "B", &[10, 11]),
            record(3, "FR", "A", &[12]),
        ]
    }

    #[test]
    fn test_empty_selection_shows_everything() {
        let records = sample();
        let selection = FilterSelection::new();
        assert!(selection.is_empty());
        assert_eq!(visible(&records, &selection), vec![1, 2, 3]);
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let records = sample();
        let mut selection = FilterSelection::new();

        selection.toggle(FacetDimension::Lang, "EN", true);
        assert_eq!(visible(&records, &selection), vec![1, 2]);

        selection.toggle(FacetDimension::Series, "A", true);
        assert_eq!(visible(&records, &selection), vec![1]);
    }

    #[test]
    fn test_absent_value_matches_nothing() {
        let records = sample();
        let mut selection = FilterSelection::new();
        selection.toggle(FacetDimension::Series, "C", true);
        assert!(visible(&records, &selection).is_empty());
    }

    #[test]
    fn test_toggle_round_trip_restores_visibility() {
        let records = sample();
        let mut selection = FilterSelection::new();
        selection.toggle(FacetDimension::Lang, "FR", true);
        let before = visible(&records, &selection);

        selection.toggle(FacetDimension::Series, "A", true);
        selection.toggle(FacetDimension::Series, "A", false);

        assert_eq!(visible(&records, &selection), before);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut selection = FilterSelection::new();
        selection.toggle(FacetDimension::Lang, "EN", true);
        selection.toggle(FacetDimension::Lang, "EN", true);
        let once = selection.clone();

        selection.toggle(FacetDimension::Lang, "EN", false);
        selection.toggle(FacetDimension::Lang, "EN", false);
        assert!(selection.is_empty());

        selection.toggle(FacetDimension::Lang, "EN", true);
        assert_eq!(selection, once);
    }

    #[test]
    fn test_toggle_order_does_not_matter() {
        let records = sample();

        let mut forward = FilterSelection::new();
        forward.toggle(FacetDimension::Lang, "EN", true);
        forward.toggle(FacetDimension::Series, "B", true);
        forward.toggle(FacetDimension::Author, "10,11", true);

        let mut backward = FilterSelection::new();
        backward.toggle(FacetDimension::Author, "10,11", true);
        backward.toggle(FacetDimension::Series, "B", true);
        backward.toggle(FacetDimension::Lang, "EN", true);

        assert_eq!(visible(&records, &forward), visible(&records, &backward));
        assert_eq!(visible(&records, &forward), vec![2]);
    }

    #[test]
    fn test_clear_shows_everything_and_resets_indicators() {
        let records = sample();
        let mut selection = FilterSelection::new();
        selection.toggle(FacetDimension::Lang, "EN", true);
        selection.toggle(FacetDimension::Series, "B", true);
        selection.toggle(FacetDimension::Author, "10", true);

        selection.clear();

        assert!(selection.is_empty());
        assert_eq!(visible(&records, &selection), vec![1, 2, 3]);
        for dim in FacetDimension::all() {
            assert!(!selection.has_selection(*dim));
        }
    }

    #[test]
    fn test_author_selection_matches_record_listed_out_of_order() {
        // The card key and the facet key share one canonical ordering, so a
        // record listing its authors as [11, 10] still matches the "10,11"
        // combination.
        let records = vec![record(1, "EN", "A", &[11, 10]), record(2, "EN", "A", &[10])];
        let mut selection = FilterSelection::new();
        selection.toggle(FacetDimension::Author, "10,11", true);
        assert_eq!(visible(&records, &selection), vec![1]);
    }

    #[test]
    fn test_author_match_is_exact_not_subset() {
        let records = sample();
        let mut selection = FilterSelection::new();
        selection.toggle(FacetDimension::Author, "10", true);
        // Record 2 shares author 10 but its combination is "10,11".
        assert_eq!(visible(&records, &selection), vec![1]);
    }

    #[test]
    fn test_multiple_values_in_one_dimension_are_a_union() {
        let records = sample();
        let mut selection = FilterSelection::new();
        selection.toggle(FacetDimension::Series, "A", true);
        selection.toggle(FacetDimension::Series, "B", true);
        assert_eq!(visible(&records, &selection), vec![1, 2, 3]);
    }
}
